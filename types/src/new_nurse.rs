use serde::{Serialize, Serializer};

const DEFAULT_TITLE: &str = "RN";

/// Input for registering a new nurse account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNurseForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub title: String,
    #[serde(serialize_with = "empty_as_null")]
    pub license_number: String,
}

impl Default for NewNurseForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            full_name: String::new(),
            title: DEFAULT_TITLE.to_string(),
            license_number: String::new(),
        }
    }
}

impl NewNurseForm {
    /// Labels of required fields that are still blank. License is optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Email", &self.email),
            ("Password", &self.password),
            ("Full name", &self.full_name),
            ("Title", &self.title),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

fn empty_as_null<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = value.trim();
    if value.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_str(value)
    }
}
