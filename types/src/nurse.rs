use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque nurse identity as issued by the backend.
///
/// Nothing is assumed about its shape; integer ids are kept as their decimal
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NurseId(String);

impl NurseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NurseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NurseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NurseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for NurseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(id) => Self(id),
            Raw::Signed(id) => Self(id.to_string()),
            Raw::Unsigned(id) => Self(id.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    pub id: NurseId,
    pub full_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(with = "crate::timestamp")]
    pub created_at: Timestamp,
}

impl Nurse {
    pub fn license_label(&self) -> &str {
        match self.license_number.as_deref() {
            Some(l) if !l.trim().is_empty() => l,
            _ => "No license",
        }
    }

    /// First letter of the name, for avatars.
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

pub fn admin_count(nurses: &[Nurse]) -> usize {
    nurses.iter().filter(|n| n.is_admin).count()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
