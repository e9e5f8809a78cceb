//! Token Service (authentication backend) client.
//!
//! - `POST /login`   → issue a token pair for username + md5 password
//! - `POST /refresh` → exchange a refresh token for a new pair
//! - `POST /logout`  → revoke the bearer access token
use async_trait::async_trait;
use md5::{Digest, Md5};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::services::session::{RefreshResponse, TokenPair, TokenRefresher};
use crate::services::upstream::client::{Envelope, ServiceClient, UpstreamError, UpstreamResult};

/// Login flow understood by the Token Service; it picks the refresh lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginFlow {
    WebsiteSession,
    RememberMe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub md5_password: String,
    pub flow: LoginFlow,
}

impl Credentials {
    /// Credentials from a plain-text password (the Token Service only sees its MD5).
    pub fn from_password(username: &str, password: &str, flow: LoginFlow) -> Self {
        Self {
            username: username.to_string(),
            md5_password: md5_hex(password),
            flow,
        }
    }
}

pub fn md5_hex(password: &str) -> String {
    hex::encode(Md5::digest(password.as_bytes()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AuthClient {
    inner: ServiceClient,
}

impl AuthClient {
    pub fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    pub async fn login(&self, credentials: &Credentials) -> UpstreamResult<Envelope<TokenPair>> {
        let req = self
            .inner
            .request(Method::POST, &["login"], None)?
            .json(credentials);
        self.inner.send(req).await
    }

    pub async fn refresh_tokens(&self, body: &RefreshRequest) -> UpstreamResult<Envelope<TokenPair>> {
        let req = self
            .inner
            .request(Method::POST, &["refresh"], None)?
            .json(body);
        self.inner.send(req).await
    }

    pub async fn logout(&self, access_token: &str) -> UpstreamResult<Envelope<serde_json::Value>> {
        let req = self
            .inner
            .request(Method::POST, &["logout"], Some(access_token))?;
        self.inner.send(req).await
    }
}

#[async_trait]
impl TokenRefresher for AuthClient {
    async fn refresh(
        &self,
        refresh_token: &str,
        username: Option<&str>,
    ) -> Result<RefreshResponse, UpstreamError> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
            username: username.map(str::to_string),
        };
        let env = self.refresh_tokens(&body).await?;

        Ok(RefreshResponse {
            status_code: env.status_code,
            tokens: env.response,
        })
    }
}
