//! Rating service client.
//!
//! - `GET /user/{id}` → every rating of one user
//! - `POST /upsert`   → create or overwrite the (user, movie) rating
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::services::upstream::client::{Envelope, ServiceClient, UpstreamResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub movie_id: String,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRating {
    pub user_id: String,
    pub movie_id: String,
    pub value: f32,
}

#[derive(Clone, Debug)]
pub struct RatingClient {
    inner: ServiceClient,
}

impl RatingClient {
    pub fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    pub async fn by_user(&self, user_id: &str) -> UpstreamResult<Envelope<Vec<Rating>>> {
        let req = self.inner.request(Method::GET, &["user", user_id], None)?;
        self.inner.send(req).await
    }

    pub async fn upsert(
        &self,
        access_token: Option<&str>,
        rating: &UpsertRating,
    ) -> UpstreamResult<Envelope<serde_json::Value>> {
        let req = self
            .inner
            .request(Method::POST, &["upsert"], access_token)?
            .json(rating);
        self.inner.send(req).await
    }
}

/// Caption shown under a star rating (half-star steps, 0.5 ..= 5).
pub fn rating_label(value: f32) -> Option<&'static str> {
    let steps = (value * 2.0).round();
    if (steps - value * 2.0).abs() > f32::EPSILON {
        return None;
    }
    match steps as i32 {
        1 => Some("Terrible"),
        2 => Some("Very Poor"),
        3 => Some("Poor"),
        4 => Some("Below Average"),
        5 => Some("Average"),
        6 => Some("Above Average"),
        7 => Some("Good"),
        8 => Some("Very Good"),
        9 => Some("Great"),
        10 => Some("Masterpiece"),
        _ => None,
    }
}
