//! Shared HTTP client for the backend services.
//!
//! Every backend (auth, user, movie, rating) answers with the same envelope:
//! `{"statusCode": <u16>, "response": <T>?, "error": <string>?}`.
//! `ServiceClient` sends the request and decodes that envelope; it does not
//! interpret `statusCode`, callers do.
use reqwest::{Method, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Upstream-layer errors (transport / decode / url).
///
/// Note:
/// - A non-200 `statusCode` is NOT an error here; it is part of the envelope.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{service} returned an undecodable body (http {status})")]
    Decode { service: &'static str, status: u16 },
    #[error("{service} base url cannot be extended with path segments")]
    BaseUrl { service: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// `response` when the envelope says 200.
    pub fn ok_response(self) -> Option<T> {
        if self.is_ok() { self.response } else { None }
    }
}

#[derive(Clone, Debug)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: Url,
    service: &'static str,
}

impl ServiceClient {
    pub fn new(http: reqwest::Client, base_url: Url, service: &'static str) -> Self {
        Self {
            http,
            base_url,
            service,
        }
    }

    /// Base url + path segments (each segment is percent-encoded).
    pub fn endpoint(&self, segments: &[&str]) -> UpstreamResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::BaseUrl {
                service: self.service,
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn request(
        &self,
        method: Method,
        segments: &[&str],
        bearer: Option<&str>,
    ) -> UpstreamResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        let req = self.http.request(method, url);
        Ok(match bearer {
            Some(token) => req.bearer_auth(token),
            None => req,
        })
    }

    pub async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> UpstreamResult<Envelope<T>> {
        let res = req.send().await?;
        let status = res.status().as_u16();
        let body = res.bytes().await?;

        serde_json::from_slice::<Envelope<T>>(&body).map_err(|e| {
            debug!(service = self.service, status, error = %e, "failed to decode envelope");
            UpstreamError::Decode {
                service: self.service,
                status,
            }
        })
    }
}
