use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::{TokenQuery, UpdateRatingResponse};
use crate::api::handlers::{bearer, passthrough};
use crate::error::AppError;
use crate::services::upstream::UpsertRating;
use crate::services::upstream::ratings::rating_label;
use crate::state::AppState;

/// POST /api/updateRating; a 200 collapses to `{"success": true}`.
pub async fn update_rating(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<TokenQuery>,
    Json(body): Json<UpsertRating>,
) -> Result<Response, AppError> {
    if rating_label(body.value).is_none() {
        return Err(AppError::InvalidRequest(
            "value must be a half-star step between 0.5 and 5".to_string(),
        ));
    }

    let token = bearer(query.access_token, &jar);
    let env = state
        .upstreams
        .ratings
        .upsert(token.as_deref(), &body)
        .await?;

    if env.is_ok() {
        Ok(Json(UpdateRatingResponse { success: true }).into_response())
    } else {
        Ok(passthrough(env))
    }
}
