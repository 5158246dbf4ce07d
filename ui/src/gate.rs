use types::Nurse;

use crate::Destination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Destination),
}

/// Decide whether `identity` may see the admin console.
///
/// An identity that has not resolved yet is treated like a non-admin. Callers
/// re-run this whenever the identity changes and must not load any admin data
/// unless it returns [`Access::Allow`].
pub fn authorize(identity: Option<&Nurse>) -> Access {
    match identity {
        Some(nurse) if nurse.is_admin => Access::Allow,
        _ => Access::Redirect(Destination::Dashboard),
    }
}
