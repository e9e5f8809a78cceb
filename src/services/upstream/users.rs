//! User service client: `GET /{username}`.
use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::services::upstream::client::{Envelope, ServiceClient, UpstreamResult};

/// Public profile as returned by the user service.
///
/// The service serializes its entity with Go field names (`ID`, `Name`, ...),
/// so both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Picture")]
    pub picture: String,
}

impl UserProfile {
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug)]
pub struct UserClient {
    inner: ServiceClient,
}

impl UserClient {
    pub fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// `T` is `UserProfile` for pages, `serde_json::Value` for pass-through.
    pub async fn get<T: DeserializeOwned>(
        &self,
        username: &str,
        access_token: Option<&str>,
    ) -> UpstreamResult<Envelope<T>> {
        let req = self
            .inner
            .request(Method::GET, &[username], access_token)?;
        self.inner.send(req).await
    }
}
