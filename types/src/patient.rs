use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A patient record as returned by the patients directory.
///
/// Only the number of patients matters to the admin console, so each entry is
/// kept as whatever JSON the backend sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patient {
    pub fields: Value,
}
