//! Session Guard middleware for the protected pages.
//!
//! Runs before the page handler, so every cookie mutation is known before any
//! page content exists:
//! - not authenticated → 307 to `/signin` (clearing cookies as the guard decided)
//! - authenticated → `SessionCtx` in extensions, page renders, rotated cookies
//!   are appended to the page response

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::extractors::SessionCtx;
use crate::state::AppState;

pub const SIGNIN_PATH: &str = "/signin";

/// Guard every route of `router` with the Session Guard.
///
/// `route_layer` so unmatched paths still fall through to the 404 page.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, require_session))
}

async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let (decision, jar) = state.guard.check(jar).await;

    if !decision.authenticated {
        tracing::debug!(path = %req.uri().path(), "no session, redirecting to sign-in");
        return (jar, Redirect::temporary(SIGNIN_PATH)).into_response();
    }

    // middleware → extractor への受け渡し
    req.extensions_mut()
        .insert(SessionCtx::new(decision.access_token, decision.username));

    let res = next.run(req).await;
    (jar, res).into_response()
}
