use types::{Credentials, Result, err};

/// A persisted key-value slot holding the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<Credentials>;

    fn save(&self, credentials: &Credentials) -> Result<()>;

    fn clear(&self) -> Result<()>;

    fn require(&self) -> Result<Credentials> {
        self.load().ok_or_else(|| err!("not signed in"))
    }
}
