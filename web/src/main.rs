use api::{Config, HttpClient, TokenStore};
use dioxus::prelude::*;
use types::{Credentials, Nurse, Result};
use ui::Destination;

mod storage;
mod views;

use storage::LocalTokenStore;
use views::{Admin, Dashboard, Login};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[redirect("/", || Route::Dashboard {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/admin")]
        Admin {},
}

impl Route {
    pub fn login(error: Option<String>) -> Self {
        Route::Login { error }
    }
}

/// Where a [`Destination`] lives. Reports are served outside this app.
pub fn destination_target(destination: Destination) -> NavigationTarget<Route> {
    match destination {
        Destination::Dashboard | Destination::ManagePatients => Route::Dashboard {}.into(),
        Destination::MonthlyReports => NavigationTarget::External(destination.path().to_string()),
    }
}

/// The signed-in nurse and the credentials their requests carry.
#[derive(Clone, Debug)]
pub struct Session {
    pub nurse: Nurse,
    pub credentials: Credentials,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.nurse == other.nurse
            && self.credentials.bearer_token() == other.credentials.bearer_token()
    }
}

pub fn token_store(config: &Config) -> LocalTokenStore {
    LocalTokenStore::new(config.token_storage_key.clone())
}

/// Resolve the stored token into a session. A rejected token is forgotten.
async fn restore_session(config: Config) -> Result<Session> {
    let store = token_store(&config);
    let credentials = store.require()?;

    match HttpClient::new(&config).current_nurse(&credentials).await {
        Ok(nurse) => Ok(Session { nurse, credentials }),
        Err(e) => {
            if e.is_unauthorized() {
                store.clear()?;
            }
            Err(e)
        }
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| match Config::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid build configuration, using defaults");
            Config::default()
        }
    });

    rsx! {
        document::Title { "Nurse Admin" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    let config = use_context::<Config>();
    let session = use_resource(move || restore_session(config.clone()));

    match &*session.read() {
        Some(Ok(session)) => rsx! {
            SessionScope { session: session.clone() }
        },
        Some(Err(e)) => {
            tracing::info!(error = %e, "no usable session");
            let error = e.is_unauthorized().then(|| "Your session has expired".to_string());
            navigator().push(Route::login(error));
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}

#[component]
fn SessionScope(session: Session) -> Element {
    let config = use_context::<Config>();
    let session = use_context_provider(|| session);
    let nurse = &session.nurse;

    let sign_out = move |_: MouseEvent| {
        if let Err(e) = token_store(&config).clear() {
            tracing::warn!(error = %e, "failed to clear stored token");
        }
        navigator().push(Route::login(None));
    };

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Nurse Admin" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    if nurse.is_admin {
                        NavLink { to: Route::Admin {}, "Admin Panel" }
                    }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        div { class: "sidebar-avatar", "{nurse.initial()}" }
                        div { class: "sidebar-user-info",
                            div { class: "sidebar-user-name", "{nurse.full_name}" }
                            div { class: "sidebar-user-role", "{nurse.title}" }
                        }
                    }
                    button { class: "sidebar-logout", onclick: sign_out, "Sign out" }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
