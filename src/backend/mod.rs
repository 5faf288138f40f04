pub mod model;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use self::model::{LoginRequest, Reply, RegisterRequest};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("reply body was JSON null")]
    NullReply,
}

pub type Result<T> = std::result::Result<T, Error>;

/// JSON client for the account backend.
#[derive(Debug, Clone)]
pub struct Backend {
    client: Client,
    base_url: String,
}

impl Backend {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Reply> {
        self.post_json("/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Reply> {
        self.post_json("/register", request).await
    }

    /// POSTs `payload` as JSON and decodes the reply body as JSON whatever the
    /// status is. A body that is not JSON, or is `null`, is an error even on
    /// 4xx/5xx: no field can be read from it.
    pub async fn post_json<T>(&self, path: &str, payload: &T) -> Result<Reply>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        log::debug!("POST {url}");

        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        log::debug!("POST {url} -> {status}");

        if body.is_null() {
            return Err(Error::NullReply);
        }

        Ok(Reply { status, body })
    }
}
