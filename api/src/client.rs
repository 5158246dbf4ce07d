use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use types::{
    Credentials, Error, LoginRequest, LoginResponse, NewNurseForm, Nurse, NurseId, Patient,
    Result,
};

use crate::{AdminApi, Config};

fn transport(e: reqwest::Error) -> Error {
    Error::from(format!("request failed: {e}"))
}

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
    async fn try_send_empty(self) -> Result<()>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = check_status(self.send().await.map_err(transport)?).await?;
        let body = response.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn try_send_empty(self) -> Result<()> {
        check_status(self.send().await.map_err(transport)?).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into an [`Error`] carrying the server's `detail`.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let detail = parse_detail(&body);
    tracing::debug!(status = status.as_u16(), ?detail, "request rejected");
    Err(Error::http(status.as_u16(), detail))
}

/// Error bodies look like `{"detail": "..."}`, or for validation failures
/// `{"detail": [{"msg": "...", ...}]}`.
fn parse_detail(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Detail {
        Message(String),
        Validation(Vec<ValidationItem>),
    }

    #[derive(Deserialize)]
    struct ValidationItem {
        msg: String,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Detail,
    }

    match serde_json::from_slice::<ErrorBody>(body).ok()?.detail {
        Detail::Message(msg) => Some(msg),
        Detail::Validation(items) => items.into_iter().next().map(|item| item.msg),
    }
}

/// REST client for the nurse backend.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, %url, "sending request");
        Ok(self.client.request(method, url))
    }

    fn authorized(
        &self,
        method: Method,
        path: &str,
        credentials: &Credentials,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(method, path)?
            .bearer_auth(credentials.bearer_token()))
    }

    /// Exchange email and password for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.request(Method::POST, "api/auth/login")?
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .try_send()
            .await
    }

    /// The nurse the credentials belong to.
    pub async fn current_nurse(&self, credentials: &Credentials) -> Result<Nurse> {
        self.authorized(Method::GET, "api/auth/me", credentials)?
            .try_send()
            .await
    }
}

impl AdminApi for HttpClient {
    async fn list_nurses(&self, credentials: &Credentials) -> Result<Vec<Nurse>> {
        self.authorized(Method::GET, "api/admin/nurses", credentials)?
            .try_send()
            .await
    }

    async fn list_patients(&self, credentials: &Credentials) -> Result<Vec<Patient>> {
        self.authorized(Method::GET, "api/patients", credentials)?
            .try_send()
            .await
    }

    async fn promote_nurse(&self, credentials: &Credentials, id: &NurseId) -> Result<()> {
        self.authorized(
            Method::POST,
            &format!("api/admin/nurses/{id}/promote"),
            credentials,
        )?
        .try_send_empty()
        .await
    }

    async fn demote_nurse(&self, credentials: &Credentials, id: &NurseId) -> Result<()> {
        self.authorized(
            Method::POST,
            &format!("api/admin/nurses/{id}/demote"),
            credentials,
        )?
        .try_send_empty()
        .await
    }

    async fn register_nurse(
        &self,
        credentials: &Credentials,
        form: &NewNurseForm,
    ) -> Result<Nurse> {
        self.authorized(Method::POST, "api/auth/register", credentials)?
            .json(form)
            .try_send()
            .await
    }
}
