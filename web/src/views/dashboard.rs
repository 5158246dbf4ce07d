use dioxus::prelude::*;
use ui::Destination;

use crate::{Route, Session, destination_target};

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Session>();

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "Welcome back, {session.nurse.full_name}." }
            }
            div { class: "dashboard-grid",
                if session.nurse.is_admin {
                    Link {
                        to: Route::Admin {},
                        class: "dashboard-card",
                        h3 { class: "dashboard-card-title", "Admin Panel" }
                        p { class: "dashboard-card-desc",
                            "Manage nurse accounts and admin privileges."
                        }
                    }
                }
                Link {
                    to: destination_target(Destination::MonthlyReports),
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "{Destination::MonthlyReports.label()}" }
                    p { class: "dashboard-card-desc", "Review monthly visit reports." }
                }
            }
        }
    }
}
