use api::{Config, HttpClient, TokenStore};
use dioxus::prelude::*;

use crate::{Route, token_store};

#[component]
pub fn Login(error: Option<String>) -> Element {
    let config = use_context::<Config>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut signing_in = use_signal(|| false);
    let mut failure = use_signal(|| error.clone());

    let can_submit = !email.read().trim().is_empty() && !password.read().is_empty();

    let sign_in = move |_: MouseEvent| {
        let config = config.clone();
        let email = email.read().trim().to_string();
        let password = password.read().clone();
        spawn(async move {
            signing_in.set(true);
            match HttpClient::new(&config).login(&email, &password).await {
                Ok(response) => match token_store(&config).save(&response.credentials()) {
                    Ok(()) => {
                        tracing::info!(nurse = %response.nurse.id, "signed in");
                        navigator().push(Route::Dashboard {});
                    }
                    Err(e) => failure.set(Some(e.to_string())),
                },
                Err(e) => {
                    tracing::warn!(error = %e, "sign in failed");
                    failure.set(Some(e.detail_or("Invalid email or password").to_string()));
                }
            }
            signing_in.set(false);
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Nurse Admin" }
                    p { class: "login-subtitle", "Sign in with your nurse account" }
                }
                if let Some(message) = failure.read().as_ref() {
                    div { class: "login-error", "{message}" }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "email", "Email" }
                    input {
                        id: "email",
                        class: "form-input",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "form-input",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                button {
                    class: "btn btn-primary login-btn",
                    disabled: !can_submit || *signing_in.read(),
                    onclick: sign_in,
                    if *signing_in.read() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
