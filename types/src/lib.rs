mod error;
mod new_nurse;
mod nurse;
mod patient;
mod session;
pub mod timestamp;

pub use error::{Error, Result};
pub use new_nurse::NewNurseForm;
pub use nurse::{Nurse, NurseId, admin_count};
pub use patient::Patient;
pub use session::{Credentials, LoginRequest, LoginResponse};

// Used by `err!`.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
