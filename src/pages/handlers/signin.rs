//! GET/POST /signin
//!
//! - GET: a caller that still holds a refresh cookie goes straight to its profile
//! - POST: form → Token Service `/login` → session cookies + 303 to the profile
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::extractors::SessionCtx;
use crate::pages::handlers::error_page;
use crate::pages::views::{
    layout,
    signin::{SignInForm, signin_content},
};
use crate::services::session::{SessionCookies, cookies};
use crate::services::upstream::{Credentials, LoginFlow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
    /// Checkbox: present (any value) when checked.
    pub remember_me: Option<String>,
}

impl SignInRequest {
    pub fn flow(&self) -> LoginFlow {
        if self.remember_me.is_some() {
            LoginFlow::RememberMe
        } else {
            LoginFlow::WebsiteSession
        }
    }
}

pub async fn show_signin(jar: CookieJar) -> Response {
    let session = SessionCookies::from_jar(&jar);

    if session.refresh_token.is_some() {
        let ctx = SessionCtx::new(None, session.username);
        return Redirect::temporary(&ctx.profile_path()).into_response();
    }

    layout::page("Sign in", None, &signin_content(&SignInForm::default())).into_response()
}

pub async fn submit_signin(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(req): Form<SignInRequest>,
) -> Response {
    let username = req.username.trim();
    let credentials = Credentials::from_password(username, &req.password, req.flow());

    let env = match state.upstreams.auth.login(&credentials).await {
        Ok(env) => env,
        Err(err) => {
            tracing::warn!(error = %err, "login call failed");
            return error_page(500, None);
        }
    };

    let status_code = env.status_code;
    let Some(tokens) = env.ok_response() else {
        tracing::info!(username = %username, status = status_code, "sign-in rejected");
        let form = SignInForm {
            username,
            remember_me: req.remember_me.is_some(),
            wrong_credentials: true,
        };
        return (
            StatusCode::UNAUTHORIZED,
            layout::page("Sign in", None, &signin_content(&form)),
        )
            .into_response();
    };

    let jar = cookies::apply(
        jar,
        &cookies::sign_in(&tokens, username),
        state.cookie_policy(),
    );
    let ctx = SessionCtx::new(Some(tokens.access_token), Some(username.to_string()));
    (jar, Redirect::to(&ctx.profile_path())).into_response()
}
