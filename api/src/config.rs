use types::Result;
use url::Url;

const DEFAULT_TOKEN_STORAGE_KEY: &str = "nurse_token";
const DEFAULT_API_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend origin; always ends with `/` so relative joins keep any prefix.
    pub base_url: Url,
    /// Key the bearer token is persisted under in the browser.
    pub token_storage_key: String,
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_token_storage_key(mut self, key: impl Into<String>) -> Self {
        self.token_storage_key = key.into();
        self
    }

    /// Configuration baked in at compile time, for the browser build.
    ///
    /// `NURSE_ADMIN_API_URL` and `NURSE_ADMIN_TOKEN_KEY` are read from the
    /// build environment and fall back to the local defaults.
    pub fn from_build_env() -> Result<Self> {
        let base_url = Url::parse(option_env!("NURSE_ADMIN_API_URL").unwrap_or(DEFAULT_API_URL))?;
        let key = option_env!("NURSE_ADMIN_TOKEN_KEY").unwrap_or(DEFAULT_TOKEN_STORAGE_KEY);
        Ok(Self::new(base_url).with_token_storage_key(key))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_API_URL).expect("default API url is valid"))
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
