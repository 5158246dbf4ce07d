//! Client side of the nurse backend's admin endpoints.

mod client;
mod config;
mod storage;

pub use client::HttpClient;
pub use config::Config;
pub use storage::TokenStore;

use types::{Credentials, NewNurseForm, Nurse, NurseId, Patient, Result};

/// The backend operations the admin console depends on.
///
/// Every call takes the credentials explicitly; nothing reads ambient storage.
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    /// `GET /api/admin/nurses`
    async fn list_nurses(&self, credentials: &Credentials) -> Result<Vec<Nurse>>;

    /// `GET /api/patients`
    async fn list_patients(&self, credentials: &Credentials) -> Result<Vec<Patient>>;

    /// `POST /api/admin/nurses/{id}/promote`
    async fn promote_nurse(&self, credentials: &Credentials, id: &NurseId) -> Result<()>;

    /// `POST /api/admin/nurses/{id}/demote`
    async fn demote_nurse(&self, credentials: &Credentials, id: &NurseId) -> Result<()>;

    /// `POST /api/auth/register`
    async fn register_nurse(&self, credentials: &Credentials, form: &NewNurseForm)
    -> Result<Nurse>;
}
