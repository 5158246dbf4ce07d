use dioxus::prelude::*;
use ui::{Toast, ToastLevel};

#[component]
pub fn StatCard(label: &'static str, value: usize, accent: &'static str) -> Element {
    rsx! {
        div { class: "card stat-card {accent}",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

/// Overlay dialog. Clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Modal(
    title: &'static str,
    on_close: EventHandler<()>,
    footer: Element,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
                div { class: "modal-footer", {footer} }
            }
        }
    }
}

#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] required: bool,
    #[props(default)] placeholder: &'static str,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: id,
                "{label}"
                if required { " *" }
            }
            input {
                id,
                class: "form-input",
                r#type: input_type,
                required,
                placeholder,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

#[component]
pub fn ToastStack(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.class(),
                    role: if toast.level == ToastLevel::Error { "alert" } else { "status" },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| on_dismiss.call(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
