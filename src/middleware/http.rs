//! Transport middleware shared by pages and `/api`.
//!
//! - `x-request-id`: generated when absent, echoed on the response
//! - `Cookie` / `Authorization` / `Set-Cookie` are marked sensitive before
//!   the trace layer sees them; session tokens travel in those headers
//! - body limit sized for the sign-in / rating forms and the small `/api` JSON
//! - a request that outlives `REQUEST_TIMEOUT` is a stuck backend call → 504

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header, header::HeaderName};
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::{
    SetSensitiveRequestHeadersLayer, SetSensitiveResponseHeadersLayer,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Largest form / JSON body accepted.
pub const FORM_BODY_LIMIT: usize = 64 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

async fn layer_error(err: BoxError) -> StatusCode {
    if err.is::<Elapsed>() {
        tracing::warn!("request timed out waiting on a backend service");
        StatusCode::GATEWAY_TIMEOUT
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn apply(router: Router) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(layer_error))
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(SetSensitiveRequestHeadersLayer::new([
            header::COOKIE,
            header::AUTHORIZATION,
        ]))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // inside the trace layer so the response is marked before it is logged
        .layer(SetSensitiveResponseHeadersLayer::new([header::SET_COOKIE]))
        .layer(RequestBodyLimitLayer::new(FORM_BODY_LIMIT))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT));

    router.layer(layers)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, routing::post};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        apply(Router::new().route(
            "/form",
            post(|body: String| async move {
                ([(header::SET_COOKIE, "MRSAccessToken=a; HttpOnly")], body)
            }),
        ))
    }

    fn post_form(len: usize) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/form")
            .header(header::CONTENT_LENGTH, len)
            .body(Body::from("x".repeat(len)))
            .unwrap()
    }

    #[tokio::test]
    async fn oversized_form_is_rejected() {
        let res = app().oneshot(post_form(FORM_BODY_LIMIT + 1)).await.unwrap();

        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn set_cookie_is_marked_sensitive() {
        let res = app().oneshot(post_form(16)).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers()[header::SET_COOKIE].is_sensitive());
        assert!(res.headers().contains_key(REQUEST_ID_HEADER));
    }
}
