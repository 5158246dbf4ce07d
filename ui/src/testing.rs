//! In-memory backend for exercising the admin workflow.

use std::{cell::RefCell, rc::Rc};

use api::AdminApi;
use jiff::Timestamp;
use serde_json::json;
use types::{Credentials, Error, NewNurseForm, Nurse, NurseId, Patient, Result, err};

pub fn nurse(n: u32, name: &str, is_admin: bool) -> Nurse {
    Nurse {
        id: NurseId::new(format!("nurse-{n}")),
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        title: "RN".to_string(),
        license_number: None,
        is_admin,
        created_at: Timestamp::from_second(1_700_000_000).unwrap(),
    }
}

fn patient(n: usize) -> Patient {
    serde_json::from_value(json!({"id": format!("p-{n}"), "full_name": format!("Patient {n}")}))
        .unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListNurses,
    ListPatients,
    Promote(NurseId),
    Demote(NurseId),
    Register(String),
}

#[derive(Default)]
struct Backend {
    nurses: Vec<Nurse>,
    patients: Vec<Patient>,
    calls: Vec<Call>,
    tokens: Vec<String>,
    fail_nurses: bool,
    fail_patients: bool,
    fail_writes: bool,
    register_error: Option<Error>,
    nurse_fetch_hook: Option<Rc<dyn Fn()>>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    backend: Rc<RefCell<Backend>>,
}

impl FakeApi {
    pub fn with_directory(nurses: Vec<Nurse>, patients: usize) -> Self {
        let api = Self::default();
        {
            let mut backend = api.backend.borrow_mut();
            backend.nurses = nurses;
            backend.patients = (0..patients).map(patient).collect();
        }
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.backend.borrow().calls.clone()
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.backend.borrow().tokens.clone()
    }

    pub fn set_nurses(&self, nurses: Vec<Nurse>) {
        self.backend.borrow_mut().nurses = nurses;
    }

    pub fn fail_nurses(&self, fail: bool) {
        self.backend.borrow_mut().fail_nurses = fail;
    }

    pub fn fail_patients(&self, fail: bool) {
        self.backend.borrow_mut().fail_patients = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.backend.borrow_mut().fail_writes = fail;
    }

    pub fn fail_register(&self, error: Error) {
        self.backend.borrow_mut().register_error = Some(error);
    }

    /// Run `hook` while a nurse directory request is in flight.
    pub fn on_nurse_fetch(&self, hook: impl Fn() + 'static) {
        self.backend.borrow_mut().nurse_fetch_hook = Some(Rc::new(hook));
    }

    fn record(&self, credentials: &Credentials, call: Call) -> std::cell::RefMut<'_, Backend> {
        let mut backend = self.backend.borrow_mut();
        backend.calls.push(call);
        backend.tokens.push(credentials.bearer_token().to_string());
        backend
    }

    fn set_admin(&self, credentials: &Credentials, call: Call, id: &NurseId, is_admin: bool) -> Result<()> {
        let mut backend = self.record(credentials, call);
        if backend.fail_writes {
            return Err(Error::http(500, None));
        }
        let nurse = backend
            .nurses
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| Error::http(404, Some("Nurse not found".into())))?;
        nurse.is_admin = is_admin;
        Ok(())
    }
}

impl AdminApi for FakeApi {
    async fn list_nurses(&self, credentials: &Credentials) -> Result<Vec<Nurse>> {
        let hook = self.backend.borrow().nurse_fetch_hook.clone();
        if let Some(hook) = hook {
            hook();
        }
        let backend = self.record(credentials, Call::ListNurses);
        if backend.fail_nurses {
            return Err(err!("connection refused"));
        }
        Ok(backend.nurses.clone())
    }

    async fn list_patients(&self, credentials: &Credentials) -> Result<Vec<Patient>> {
        let backend = self.record(credentials, Call::ListPatients);
        if backend.fail_patients {
            return Err(Error::http(500, None));
        }
        Ok(backend.patients.clone())
    }

    async fn promote_nurse(&self, credentials: &Credentials, id: &NurseId) -> Result<()> {
        self.set_admin(credentials, Call::Promote(id.clone()), id, true)
    }

    async fn demote_nurse(&self, credentials: &Credentials, id: &NurseId) -> Result<()> {
        self.set_admin(credentials, Call::Demote(id.clone()), id, false)
    }

    async fn register_nurse(&self, credentials: &Credentials, form: &NewNurseForm) -> Result<Nurse> {
        let mut backend = self.record(credentials, Call::Register(form.email.clone()));
        if let Some(e) = backend.register_error.clone() {
            return Err(e);
        }

        let mut created = nurse(1000 + backend.nurses.len() as u32, &form.full_name, false);
        created.email = form.email.clone();
        created.title = form.title.clone();
        created.license_number = Some(form.license_number.clone()).filter(|l| !l.is_empty());
        backend.nurses.push(created.clone());
        Ok(created)
    }
}
