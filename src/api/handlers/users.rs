use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::TokenQuery;
use crate::api::handlers::{bearer, passthrough};
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/user/{username}
pub async fn get_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(username): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Result<Response, AppError> {
    let token = bearer(query.access_token, &jar);
    let env = state
        .upstreams
        .users
        .get::<serde_json::Value>(&username, token.as_deref())
        .await?;
    Ok(passthrough(env))
}
