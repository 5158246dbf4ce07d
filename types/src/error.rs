use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A cloneable error suitable for showing to the user.
///
/// `detail` is only set when the backend answered with a `detail` field in its
/// error body; `status` is set for any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl Error {
    pub fn http(status: u16, detail: Option<String>) -> Self {
        let message = match &detail {
            Some(detail) => format!("request failed with status {status}: {detail}"),
            None => format!("request failed with status {status}"),
        };
        Self {
            message,
            status: Some(status),
            detail,
        }
    }

    /// The server-provided detail if there is one, otherwise `fallback`.
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail.as_deref().unwrap_or(fallback)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        // Alternate Display joins the context chain without a backtrace
        Self {
            message: format!("{:#}", report),
            status: None,
            detail: None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::from(format!("invalid url: {e}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::from(format!("failed to parse response: {e}"))
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self {
            message: s,
            status: None,
            detail: None,
        }
    }
}

/// Construct an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_keeps_detail() {
        let e = Error::http(400, Some("Email already registered".into()));
        assert_eq!(e.status, Some(400));
        assert_eq!(e.detail_or("fallback"), "Email already registered");
        assert!(e.to_string().contains("Email already registered"));
    }

    #[test]
    fn detail_falls_back() {
        let e = Error::http(500, None);
        assert_eq!(e.detail_or("Failed to create nurse"), "Failed to create nurse");
        assert!(!e.is_unauthorized());
        assert!(Error::http(401, None).is_unauthorized());
    }

    #[test]
    fn err_macro_formats() {
        let e = crate::err!("nurse {} not found", 7);
        assert_eq!(e.message, "nurse 7 not found");
        assert_eq!(e.to_string(), "nurse 7 not found");
        assert_eq!(e.status, None);
    }

    #[test]
    fn anyhow_context_is_one_line() {
        let report = anyhow::anyhow!("quota exceeded").context("saving token");
        let e = Error::from(report);
        assert_eq!(e.message, "saving token: quota exceeded");
        assert!(!e.message.contains("Stack backtrace"));
    }
}
