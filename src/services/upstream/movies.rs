//! Movie service client: `GET /{id}`.
use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::services::upstream::client::{Envelope, ServiceClient, UpstreamResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct MovieClient {
    inner: ServiceClient,
}

impl MovieClient {
    pub fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        id: &str,
        access_token: Option<&str>,
    ) -> UpstreamResult<Envelope<T>> {
        let req = self.inner.request(Method::GET, &[id], access_token)?;
        self.inner.send(req).await
    }
}
