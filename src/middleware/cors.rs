//! CORS for the `/api` proxy only.
//!
//! Pages and their forms are same-origin and get no CORS headers at all.
//! Credentials are never allowed cross-origin: another origin can call `/api`
//! with an explicit `?accessToken=`, but the browser will not attach or accept
//! the session cookies for it.
//!
//! Origins: any in development, `CORS_ALLOWED_ORIGINS` in production (an empty
//! list allows none).

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::middleware::http::REQUEST_ID_HEADER;

fn allow_origin(config: &Config) -> AllowOrigin {
    if !config.app_env.is_production() {
        return AllowOrigin::from(Any);
    }

    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    AllowOrigin::predicate(move |origin: &HeaderValue, _| allowed.contains(origin))
}

pub fn apply<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(config))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(Duration::from_secs(5 * 60));

    router.layer(cors)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, routing::post};
    use tower::ServiceExt;

    use super::*;

    fn config(app_env: &str, origins: &str) -> Config {
        let (app_env, origins) = (app_env.to_string(), origins.to_string());
        Config::from_lookup(move |key| match key {
            "APP_ENV" => Some(app_env.clone()),
            "CORS_ALLOWED_ORIGINS" => Some(origins.clone()),
            k if k.ends_with("_SERVICE_URL") => Some("http://backend.local".to_string()),
            _ => None,
        })
        .unwrap()
    }

    async fn preflight(config: &Config, origin: &str) -> Option<HeaderValue> {
        let app = apply(Router::new().route("/signin", post(|| async {})), config);
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/signin")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let res = app.oneshot(req).await.unwrap();
        assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
        res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).cloned()
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let origin = preflight(&config("development", ""), "http://elsewhere.test").await;

        assert_eq!(origin.unwrap(), "*");
    }

    #[tokio::test]
    async fn production_only_allows_listed_origins() {
        let config = config("production", "https://mrs.example");

        let listed = preflight(&config, "https://mrs.example").await;
        assert_eq!(listed.unwrap(), "https://mrs.example");

        assert!(preflight(&config, "https://evil.example").await.is_none());
    }
}
