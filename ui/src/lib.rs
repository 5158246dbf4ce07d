//! Headless admin console: authorization gate, view state, and the
//! load / mutate / reload workflow. Rendering lives in the `web` crate.

mod gate;
mod nav;
mod panel;
mod state;
mod toast;

#[cfg(test)]
mod testing;

pub use gate::{Access, authorize};
pub use nav::{Destination, QUICK_ACTIONS};
pub use panel::AdminPanel;
pub use state::{AdminState, StateStore};
pub use toast::{Toast, ToastLevel};
