use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use types::{NewNurseForm, Nurse, NurseId, Patient, admin_count};

use crate::toast::{Toast, ToastLevel};

/// Everything the admin console renders.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub nurses: Vec<Nurse>,
    pub patients: Vec<Patient>,
    pub loading: bool,
    /// `Some` while the create-nurse dialog is open.
    pub create_form: Option<NewNurseForm>,
    pub submitting: bool,
    /// Nurse whose profile dialog is open.
    pub selected: Option<NurseId>,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            nurses: Vec::new(),
            patients: Vec::new(),
            loading: true,
            create_form: None,
            submitting: false,
            selected: None,
            toasts: Vec::new(),
            next_toast_id: 0,
        }
    }
}

impl AdminState {
    pub fn nurse_count(&self) -> usize {
        self.nurses.len()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn admin_count(&self) -> usize {
        admin_count(&self.nurses)
    }

    pub fn find_nurse(&self, id: &NurseId) -> Option<&Nurse> {
        self.nurses.iter().find(|n| &n.id == id)
    }

    pub fn selected_nurse(&self) -> Option<&Nurse> {
        self.selected.as_ref().and_then(|id| self.find_nurse(id))
    }

    /// Replace both directories wholesale.
    pub(crate) fn replace_directories(&mut self, nurses: Vec<Nurse>, patients: Vec<Patient>) {
        self.nurses = nurses;
        self.patients = patients;
        if self.selected_nurse().is_none() {
            self.selected = None;
        }
    }

    pub(crate) fn push_toast(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn last_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

/// Shared, interior-mutable home of an [`AdminState`].
///
/// Borrows never outlive the closure, so nothing is held across an `.await`
/// and the page stays usable while requests are in flight.
pub trait StateStore: Clone {
    fn read_state<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R;

    fn update_state<R>(&self, f: impl FnOnce(&mut AdminState) -> R) -> R;
}

impl StateStore for Signal<AdminState> {
    fn read_state<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        f(&self.read())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut AdminState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

impl StateStore for Rc<RefCell<AdminState>> {
    fn read_state<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut AdminState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
