use api::TokenStore;
use types::{Credentials, Result, err};

/// Bearer token persisted in the browser's `localStorage`.
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| err!("no browser window"))?
        .local_storage()
        .ok()
        .flatten()
        .ok_or_else(|| err!("localStorage is unavailable"))
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<Credentials> {
        local_storage()
            .ok()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .map(Credentials::new)
    }

    fn save(&self, credentials: &Credentials) -> Result<()> {
        local_storage()?
            .set_item(&self.key, credentials.bearer_token())
            .map_err(|_| err!("failed to store token under '{}'", self.key))
    }

    fn clear(&self) -> Result<()> {
        local_storage()?
            .remove_item(&self.key)
            .map_err(|_| err!("failed to remove token under '{}'", self.key))
    }
}
