use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::Nurse;

/// Bearer credentials for the nurse backend.
#[derive(Debug, Clone)]
pub struct Credentials {
    token: SecretString,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }

    pub fn bearer_token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl From<SecretString> for Credentials {
    fn from(token: SecretString) -> Self {
        Self { token }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
    pub nurse: Nurse,
}

impl LoginResponse {
    pub fn credentials(&self) -> Credentials {
        Credentials::from(self.access_token.clone())
    }
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}
