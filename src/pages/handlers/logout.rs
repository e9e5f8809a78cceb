//! GET /logout: revoke the access token (best effort) and clear the session cookies.
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::pages::views::{layout, pages};
use crate::services::session::{SessionCookies, cookies};
use crate::state::AppState;

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let session = SessionCookies::from_jar(&jar);

    if let Some(access_token) = session.access_token.as_deref() {
        match state.upstreams.auth.logout(access_token).await {
            Ok(env) if env.is_ok() => {
                tracing::debug!(username = ?session.username, "access token revoked")
            }
            Ok(env) => {
                tracing::warn!(status = env.status_code, error = ?env.error, "logout rejected")
            }
            Err(err) => tracing::warn!(error = %err, "logout call failed"),
        }
    }

    let jar = cookies::apply(jar, &cookies::clear_session(), state.cookie_policy());
    (
        jar,
        layout::page("Signed out", None, &pages::signed_out_content()),
    )
        .into_response()
}
