/*
 * Responsibility
 * - /api の request DTO のうち、backend の payload と形が違うもの
 * - backend と同形のもの (Credentials, RefreshRequest, UpsertRating) は services::upstream を使う
 */
use serde::{Deserialize, Serialize};

/// `?accessToken=...` (falls back to the access-token cookie when absent).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenQuery {
    pub access_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub access_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateRatingResponse {
    pub success: bool,
}
