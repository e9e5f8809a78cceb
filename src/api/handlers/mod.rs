/*
 * Responsibility
 * - /api の handler 群 (backend の envelope をそのまま返す proxy)
 * - envelope の statusCode を HTTP status として返す共通処理 (passthrough)
 * - Bearer token の解決 (query → cookie の順)
 */
pub mod auth;
pub mod health;
pub mod movies;
pub mod ratings;
pub mod users;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::services::session::SessionCookies;
use crate::services::upstream::Envelope;

/// HTTP status taken from the envelope; an unusable code becomes 502.
pub fn envelope_status<T>(env: &Envelope<T>) -> StatusCode {
    StatusCode::from_u16(env.status_code).unwrap_or(StatusCode::BAD_GATEWAY)
}

pub fn passthrough<T: Serialize>(env: Envelope<T>) -> Response {
    (envelope_status(&env), Json(env)).into_response()
}

/// Explicit token first, then the access-token cookie.
pub fn bearer(explicit: Option<String>, jar: &CookieJar) -> Option<String> {
    explicit
        .filter(|t| !t.is_empty())
        .or_else(|| SessionCookies::from_jar(jar).access_token)
}
