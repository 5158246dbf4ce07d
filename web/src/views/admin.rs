use api::{Config, HttpClient};
use dioxus::prelude::*;
use types::{NewNurseForm, Nurse};
use ui::{Access, AdminPanel, AdminState, QUICK_ACTIONS, authorize};

use super::components::{FormField, Modal, StatCard, ToastStack};
use crate::{Session, destination_target};

type Panel = AdminPanel<HttpClient, Signal<AdminState>>;

/// Admin-only page. Anyone else is sent away before anything is fetched.
#[component]
pub fn Admin() -> Element {
    let session = use_context::<Session>();

    match authorize(Some(&session.nurse)) {
        Access::Allow => rsx! {
            AdminConsole { session }
        },
        Access::Redirect(destination) => {
            tracing::info!(nurse = %session.nurse.id, "non-admin sent away from admin panel");
            navigator().replace(destination_target(destination));
            rsx! {
                div { class: "loading", "Redirecting..." }
            }
        }
    }
}

#[component]
fn AdminConsole(session: Session) -> Element {
    let config = use_context::<Config>();
    let state = use_signal(AdminState::default);
    let panel: Panel = use_hook(|| {
        AdminPanel::new(
            HttpClient::new(&config),
            session.credentials.clone(),
            session.nurse.id.clone(),
            state,
        )
    });
    use_context_provider(|| panel.clone());

    // Fetch directories on mount
    let loader = panel.clone();
    use_effect(move || {
        let panel = loader.clone();
        spawn(async move {
            let _ = panel.load_all().await;
        });
    });

    let s = state.read();

    let toasts = rsx! {
        ToastStack {
            toasts: s.toasts.clone(),
            on_dismiss: {
                let panel = panel.clone();
                move |id: u64| panel.dismiss_toast(id)
            },
        }
    };

    if s.loading && s.nurses.is_empty() {
        return rsx! {
            {toasts}
            div { class: "loading", "Loading..." }
        };
    }

    rsx! {
        {toasts}
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Admin Panel" }
                    p { class: "page-subtitle", "Manage nurses and assignments" }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: {
                            let panel = panel.clone();
                            move |_| panel.open_create_dialog()
                        },
                        "Add Nurse"
                    }
                }
            }

            div { class: "grid grid-cols-3",
                StatCard { label: "Total Nurses", value: s.nurse_count(), accent: "accent-purple" }
                StatCard { label: "Total Patients", value: s.patient_count(), accent: "accent-eggplant" }
                StatCard { label: "Admins", value: s.admin_count(), accent: "accent-amber" }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Quick Actions" }
                }
                div { class: "quick-actions",
                    for destination in QUICK_ACTIONS {
                        button {
                            key: "{destination.label()}",
                            class: "btn btn-secondary quick-action",
                            onclick: move |_| {
                                navigator().push(destination_target(destination));
                            },
                            span { "{destination.label()}" }
                            span { class: "quick-action-arrow", "›" }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Manage Nurses" }
                    p { class: "card-subtitle", "View all nurses and manage admin privileges" }
                }
                ul { class: "nurse-list",
                    for nurse in s.nurses.iter() {
                        NurseRow {
                            key: "{nurse.id}",
                            nurse: nurse.clone(),
                            can_promote: panel.can_promote(nurse),
                            can_demote: panel.can_demote(nurse),
                        }
                    }
                }
            }

            if let Some(form) = s.create_form.clone() {
                CreateNurseModal { form, submitting: s.submitting }
            }

            if let Some(nurse) = s.selected_nurse().cloned() {
                NurseProfileModal { nurse }
            }
        }
    }
}

#[component]
fn NurseRow(nurse: Nurse, can_promote: bool, can_demote: bool) -> Element {
    let panel = use_context::<Panel>();
    let id = nurse.id.clone();

    let view = {
        let (panel, id) = (panel.clone(), id.clone());
        move |_: MouseEvent| panel.view_profile(id.clone())
    };
    let promote = {
        let (panel, id) = (panel.clone(), id.clone());
        move |_: MouseEvent| {
            let (panel, id) = (panel.clone(), id.clone());
            spawn(async move {
                let _ = panel.promote(id).await;
            });
        }
    };
    let demote = move |_: MouseEvent| {
        let (panel, id) = (panel.clone(), id.clone());
        spawn(async move {
            let _ = panel.demote(id).await;
        });
    };

    rsx! {
        li { class: "nurse-row",
            div { class: "nurse-row-identity",
                div { class: "nurse-avatar", "{nurse.initial()}" }
                div {
                    p { class: "nurse-name",
                        "{nurse.full_name}"
                        if nurse.is_admin {
                            span { class: "badge badge-admin", "Admin" }
                        }
                    }
                    p { class: "nurse-meta",
                        "{nurse.email} • {nurse.title} • {nurse.license_label()}"
                    }
                }
            }
            div { class: "nurse-row-actions",
                button { class: "btn btn-link", onclick: view, "View" }
                if can_promote {
                    button { class: "btn btn-secondary btn-sm", onclick: promote, "Promote to Admin" }
                }
                if can_demote {
                    button { class: "btn btn-danger btn-sm", onclick: demote, "Remove Admin" }
                }
            }
        }
    }
}

#[component]
fn CreateNurseModal(form: NewNurseForm, submitting: bool) -> Element {
    let panel = use_context::<Panel>();

    let edit = |apply: fn(&mut NewNurseForm, String)| {
        let panel = panel.clone();
        move |value: String| panel.edit_form(|f| apply(f, value))
    };
    let cancel = {
        let panel = panel.clone();
        move |_: ()| panel.cancel_create_dialog()
    };
    let cancel_button = {
        let panel = panel.clone();
        move |_: MouseEvent| panel.cancel_create_dialog()
    };
    let submit = {
        let panel = panel.clone();
        move |_: MouseEvent| {
            let panel = panel.clone();
            spawn(async move {
                let _ = panel.submit_new_nurse().await;
            });
        }
    };

    rsx! {
        Modal {
            title: "Add Nurse",
            on_close: cancel,
            footer: rsx! {
                button { class: "btn btn-secondary", onclick: cancel_button, "Cancel" }
                button {
                    class: "btn btn-primary",
                    disabled: !form.is_complete() || submitting,
                    onclick: submit,
                    if submitting { "Creating..." } else { "Create Nurse" }
                }
            },
            FormField {
                id: "full_name",
                label: "Full Name",
                required: true,
                value: form.full_name.clone(),
                on_input: edit(|f, v| f.full_name = v),
            }
            FormField {
                id: "email",
                label: "Email",
                input_type: "email",
                required: true,
                value: form.email.clone(),
                on_input: edit(|f, v| f.email = v),
            }
            FormField {
                id: "password",
                label: "Password",
                input_type: "password",
                required: true,
                value: form.password.clone(),
                on_input: edit(|f, v| f.password = v),
            }
            FormField {
                id: "title",
                label: "Title",
                required: true,
                placeholder: "e.g. RN, LPN, NP",
                value: form.title.clone(),
                on_input: edit(|f, v| f.title = v),
            }
            FormField {
                id: "license_number",
                label: "License Number",
                value: form.license_number.clone(),
                on_input: edit(|f, v| f.license_number = v),
            }
        }
    }
}

#[component]
fn NurseProfileModal(nurse: Nurse) -> Element {
    let panel = use_context::<Panel>();
    let joined = nurse.created_at.strftime("%b %d, %Y").to_string();
    let close = {
        let panel = panel.clone();
        move |_: ()| panel.close_profile()
    };
    let close_button = move |_: MouseEvent| panel.close_profile();

    rsx! {
        Modal {
            title: "Nurse Profile",
            on_close: close,
            footer: rsx! {
                button { class: "btn btn-primary", onclick: close_button, "Close" }
            },
            div { class: "profile-header",
                div { class: "nurse-avatar nurse-avatar-lg", "{nurse.initial()}" }
                div {
                    h3 { class: "profile-name", "{nurse.full_name}" }
                    if nurse.is_admin {
                        span { class: "badge badge-admin", "Admin" }
                    }
                }
            }
            div { class: "form-group",
                span { class: "form-label", "Email" }
                div { class: "form-value", "{nurse.email}" }
            }
            div { class: "form-group",
                span { class: "form-label", "Title" }
                div { class: "form-value", "{nurse.title}" }
            }
            div { class: "form-group",
                span { class: "form-label", "License Number" }
                div { class: "form-value", "{nurse.license_label()}" }
            }
            div { class: "form-group",
                span { class: "form-label", "Joined" }
                div { class: "form-value", "{joined}" }
            }
        }
    }
}
