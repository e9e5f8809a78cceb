//! Test helpers: an in-process fake of the four backend services and a fully
//! wired application router pointing at it.
use axum::{
    Json, Router,
    body::Body,
    extract::Path,
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::app::build_router;
use crate::config::Config;
use crate::services::session::CookiePolicy;
use crate::services::upstream::{auth::md5_hex, build_upstreams};
use crate::state::AppState;

pub const GOOD_PASSWORD: &str = "secret";
pub const GOOD_REFRESH: &str = "good-refresh";
/// Refresh token the fake answers with 200 but without a new refresh token.
pub const PARTIAL_REFRESH: &str = "partial-refresh";

fn envelope(status: StatusCode, body: Value) -> Response {
    let payload = if status == StatusCode::OK {
        json!({"statusCode": status.as_u16(), "response": body})
    } else {
        json!({"statusCode": status.as_u16(), "error": body})
    };
    (status, Json(payload)).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn tokens(access: &str, refresh: &str) -> Value {
    json!({
        "accessToken": access,
        "accessTokenExpiration": 900,
        "refreshToken": refresh,
        "refreshTokenExpiration": 604800,
    })
}

fn backend_router() -> Router {
    Router::new()
        .route(
            "/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["username"] == "alice" && body["md5Password"] == md5_hex(GOOD_PASSWORD) {
                    envelope(StatusCode::OK, tokens("acc-1", "ref-1"))
                } else {
                    envelope(StatusCode::UNAUTHORIZED, json!("Unauthorized"))
                }
            }),
        )
        .route(
            "/auth/refresh",
            post(|Json(body): Json<Value>| async move {
                if body["refreshToken"] == GOOD_REFRESH {
                    envelope(StatusCode::OK, tokens("acc-2", "ref-2"))
                } else if body["refreshToken"] == PARTIAL_REFRESH {
                    envelope(
                        StatusCode::OK,
                        json!({"accessToken": "acc-3", "accessTokenExpiration": 900}),
                    )
                } else {
                    envelope(StatusCode::UNAUTHORIZED, json!("Unauthorized"))
                }
            }),
        )
        .route(
            "/auth/logout",
            post(|headers: HeaderMap| async move {
                match bearer(&headers) {
                    Some(_) => envelope(StatusCode::OK, json!("OK")),
                    None => envelope(StatusCode::BAD_REQUEST, json!("Bad Request")),
                }
            }),
        )
        .route(
            "/users/{username}",
            get(|Path(username): Path<String>, headers: HeaderMap| async move {
                if username != "alice" {
                    return envelope(StatusCode::NOT_FOUND, json!("user not found"));
                }
                envelope(
                    StatusCode::OK,
                    json!({
                        "ID": "u-alice",
                        "Username": "alice",
                        "Name": "Alice Liddell",
                        "Picture": "https://img.example/alice.png",
                        "Bearer": bearer(&headers),
                    }),
                )
            }),
        )
        .route(
            "/ratings/user/{id}",
            get(|Path(id): Path<String>| async move {
                if id != "u-alice" {
                    return envelope(StatusCode::NOT_FOUND, json!("rating not found"));
                }
                envelope(
                    StatusCode::OK,
                    json!([
                        {"id": "r1", "userId": "u-alice", "movieId": "m1", "value": 4.5},
                        {"id": "r2", "userId": "u-alice", "movieId": "gone", "value": 1.0},
                        {"id": "r3", "userId": "u-alice", "movieId": "m2", "value": 2.5},
                    ]),
                )
            }),
        )
        .route(
            "/ratings/upsert",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if bearer(&headers).as_deref() != Some("acc-1") {
                    return envelope(StatusCode::UNAUTHORIZED, json!("Unauthorized"));
                }
                envelope(StatusCode::OK, body)
            }),
        )
        .route(
            "/movies/{id}",
            get(|Path(id): Path<String>| async move {
                let title = match id.as_str() {
                    "m1" => "Heat",
                    "m2" => "Alien",
                    _ => return envelope(StatusCode::NOT_FOUND, json!("movie not found")),
                };
                envelope(
                    StatusCode::OK,
                    json!({"id": id, "title": title, "poster": format!("https://img.example/{id}.jpg")}),
                )
            }),
        )
}

/// Serve the fake backend on an ephemeral port; returns its base url.
pub async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend_router()).await.unwrap();
    });
    format!("http://{addr}")
}

/// Application router wired to the fake backend (development cookie policy).
pub async fn test_app() -> Router {
    let base = spawn_backend().await;
    let config = Config::from_lookup(|key| match key {
        "AUTH_SERVICE_URL" => Some(format!("{base}/auth")),
        "USER_SERVICE_URL" => Some(format!("{base}/users")),
        "MOVIE_SERVICE_URL" => Some(format!("{base}/movies")),
        "RATING_SERVICE_URL" => Some(format!("{base}/ratings")),
        _ => None,
    })
    .unwrap();

    let upstreams = build_upstreams(&config).unwrap();
    let state = AppState::with_auth_refresher(upstreams, CookiePolicy::for_env(config.app_env));
    build_router(state, &config)
}

pub fn request(method: &str, uri: &str, cookie: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(body).unwrap()
}

pub fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut req = request(method, uri, cookie, Body::from(body.to_string()));
    req.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    req
}

pub fn form_request(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut req = request("POST", uri, cookie, Body::from(body.to_string()));
    req.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    req
}

/// All `Set-Cookie` header values of a response.
pub fn set_cookies(res: &Response) -> Vec<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

pub fn location(res: &Response) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_string(res: Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
