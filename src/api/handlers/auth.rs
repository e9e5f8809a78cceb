/*
 * Responsibility
 * - POST /api/signin, /api/logout, /api/refreshToken
 * - Token Service の envelope をそのまま返しつつ、session Cookie を書き換える
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::LogoutRequest;
use crate::api::handlers::{bearer, envelope_status, passthrough};
use crate::error::AppError;
use crate::services::session::cookies;
use crate::services::upstream::Credentials;
use crate::services::upstream::auth::RefreshRequest;
use crate::state::AppState;

/// On 200 the access, refresh and username cookies are set.
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<Response, AppError> {
    let env = state.upstreams.auth.login(&credentials).await?;

    let mutations = match (&env.response, env.is_ok()) {
        (Some(tokens), true) => cookies::sign_in(tokens, &credentials.username),
        _ => {
            tracing::info!(
                username = %credentials.username,
                status = env.status_code,
                "sign-in rejected"
            );
            Vec::new()
        }
    };

    let jar = cookies::apply(jar, &mutations, state.cookie_policy());
    Ok((envelope_status(&env), jar, Json(env)).into_response())
}

/// Session cookies are cleared whatever the Token Service answers.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LogoutRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let explicit = body.ok().and_then(|Json(b)| b.access_token);
    let token = bearer(explicit, &jar);
    let jar = cookies::apply(jar, &cookies::clear_session(), state.cookie_policy());

    let Some(token) = token else {
        return Ok((
            jar,
            AppError::InvalidRequest("missing accessToken".to_string()),
        )
            .into_response());
    };

    let env = state.upstreams.auth.logout(&token).await?;
    Ok((envelope_status(&env), jar, Json(env)).into_response())
}

/// Plain proxy to the Token Service `/refresh`; cookies are left to the caller.
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> Result<Response, AppError> {
    if body.refresh_token.is_empty() {
        return Err(AppError::InvalidRequest("missing refreshToken".to_string()));
    }

    let env = state.upstreams.auth.refresh_tokens(&body).await?;
    Ok(passthrough(env))
}
