#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.level {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}
