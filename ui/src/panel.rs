use api::AdminApi;
use types::{Credentials, NewNurseForm, Nurse, NurseId, Patient, Result, err};

use crate::{StateStore, toast::ToastLevel};

const LOAD_FAILED: &str = "Failed to load admin data";
const PROMOTED: &str = "Nurse promoted to admin";
const PROMOTE_FAILED: &str = "Failed to promote nurse";
const DEMOTED: &str = "Admin privileges removed";
const DEMOTE_FAILED: &str = "Failed to remove admin privileges";
const CREATED: &str = "Nurse account created";
const CREATE_FAILED: &str = "Failed to create nurse";

/// Loads the nurse and patient directories and runs admin mutations against
/// the backend.
///
/// Every successful write is followed by a full reload; nothing is patched
/// locally. Failures are reported as toasts on the state, and the returned
/// `Result` only tells the caller what happened.
#[derive(Clone)]
pub struct AdminPanel<A, S> {
    api: A,
    credentials: Credentials,
    acting_admin: NurseId,
    state: S,
}

impl<A: AdminApi, S: StateStore> AdminPanel<A, S> {
    pub fn new(api: A, credentials: Credentials, acting_admin: NurseId, state: S) -> Self {
        Self {
            api,
            credentials,
            acting_admin,
            state,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn can_promote(&self, nurse: &Nurse) -> bool {
        !nurse.is_admin
    }

    /// Admins can demote other admins, never themselves.
    pub fn can_demote(&self, nurse: &Nurse) -> bool {
        nurse.is_admin && nurse.id != self.acting_admin
    }

    /// Fetch both directories and replace the local copies.
    ///
    /// If either request fails the previous collections are kept as they
    /// were. `loading` is cleared in every case.
    pub async fn load_all(&self) -> Result<()> {
        self.state.update_state(|s| s.loading = true);

        let result = self.fetch_directories().await;

        self.state.update_state(|s| {
            match &result {
                Ok((nurses, patients)) => {
                    s.replace_directories(nurses.clone(), patients.clone());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "loading admin data failed");
                    s.push_toast(ToastLevel::Error, LOAD_FAILED);
                }
            }
            s.loading = false;
        });

        result.map(|_| ())
    }

    async fn fetch_directories(&self) -> Result<(Vec<Nurse>, Vec<Patient>)> {
        let nurses = self.api.list_nurses(&self.credentials).await?;
        let patients = self.api.list_patients(&self.credentials).await?;
        tracing::debug!(
            nurses = nurses.len(),
            patients = patients.len(),
            "loaded directories"
        );
        Ok((nurses, patients))
    }

    pub async fn promote(&self, id: NurseId) -> Result<()> {
        if self.state.read_state(|s| s.find_nurse(&id).is_none()) {
            tracing::warn!(%id, "refusing to promote unknown nurse");
            self.toast(ToastLevel::Error, PROMOTE_FAILED);
            return Err(err!("nurse {} is not in the directory", id));
        }

        match self.api.promote_nurse(&self.credentials, &id).await {
            Ok(()) => {
                tracing::info!(%id, "promoted nurse to admin");
                self.toast(ToastLevel::Success, PROMOTED);
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "promote failed");
                self.toast(ToastLevel::Error, PROMOTE_FAILED);
                Err(e)
            }
        }
    }

    pub async fn demote(&self, id: NurseId) -> Result<()> {
        if id == self.acting_admin {
            tracing::warn!(%id, "refusing self-demotion");
            self.toast(
                ToastLevel::Error,
                "You cannot remove your own admin privileges",
            );
            return Err(err!("admins cannot demote themselves"));
        }

        match self.api.demote_nurse(&self.credentials, &id).await {
            Ok(()) => {
                tracing::info!(%id, "removed admin privileges");
                self.toast(ToastLevel::Success, DEMOTED);
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "demote failed");
                self.toast(ToastLevel::Error, DEMOTE_FAILED);
                Err(e)
            }
        }
    }

    /// Open the create-nurse dialog with a blank form. An already open dialog
    /// keeps what was typed.
    pub fn open_create_dialog(&self) {
        self.state.update_state(|s| {
            s.create_form.get_or_insert_with(NewNurseForm::default);
        });
    }

    pub fn edit_form(&self, f: impl FnOnce(&mut NewNurseForm)) {
        self.state.update_state(|s| {
            if let Some(form) = s.create_form.as_mut() {
                f(form);
            }
        });
    }

    pub fn cancel_create_dialog(&self) {
        self.state.update_state(|s| s.create_form = None);
    }

    /// Register the nurse described by the open form.
    ///
    /// On success the dialog closes and the directories reload. On failure
    /// the dialog stays open with the form untouched and the server's detail
    /// message, if any, is shown.
    pub async fn submit_new_nurse(&self) -> Result<Nurse> {
        let form = self.state.update_state(|s| {
            if s.submitting {
                return Err(err!("a nurse is already being created"));
            }
            let form = s
                .create_form
                .clone()
                .ok_or_else(|| err!("the create nurse dialog is not open"))?;

            let missing = form.missing_fields();
            if !missing.is_empty() {
                s.push_toast(
                    ToastLevel::Error,
                    format!("Please fill in: {}", missing.join(", ")),
                );
                return Err(err!("missing required fields: {}", missing.join(", ")));
            }

            s.submitting = true;
            Ok(form)
        })?;

        match self.api.register_nurse(&self.credentials, &form).await {
            Ok(nurse) => {
                tracing::info!(id = %nurse.id, "created nurse account");
                self.state.update_state(|s| {
                    s.submitting = false;
                    s.create_form = None;
                    s.push_toast(ToastLevel::Success, CREATED);
                });
                self.reload().await;
                Ok(nurse)
            }
            Err(e) => {
                tracing::warn!(error = %e, "creating nurse failed");
                self.state.update_state(|s| {
                    s.submitting = false;
                    s.push_toast(ToastLevel::Error, e.detail_or(CREATE_FAILED));
                });
                Err(e)
            }
        }
    }

    pub fn view_profile(&self, id: NurseId) {
        self.state.update_state(|s| {
            if s.find_nurse(&id).is_some() {
                s.selected = Some(id);
            }
        });
    }

    pub fn close_profile(&self) {
        self.state.update_state(|s| s.selected = None);
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.state.update_state(|s| s.dismiss_toast(id));
    }

    async fn reload(&self) {
        // load_all reports its own failures
        let _ = self.load_all().await;
    }

    fn toast(&self, level: ToastLevel, message: &str) {
        self.state.update_state(|s| {
            s.push_toast(level, message);
        });
    }
}
