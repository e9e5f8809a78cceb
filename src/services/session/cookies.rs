//! Session cookies: names, attributes and the mutations the guard emits.
//!
//! Every cookie written by this front-end shares one attribute set:
//! `HttpOnly`, `Path=/`, `SameSite=Lax`, and `Secure` only in production.
//! The production flag comes from `CookiePolicy` (built from `Config`), never
//! from the process environment at call time.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::config::AppEnv;
use crate::services::session::types::TokenPair;

pub const ACCESS_TOKEN_COOKIE: &str = "MRSAccessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "MRSRefreshToken";
pub const USERNAME_COOKIE: &str = "username";

/// Max-age written when a cookie must be deleted immediately.
pub const DELETE_MAX_AGE_SECONDS: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
}

impl CookiePolicy {
    pub fn for_env(app_env: AppEnv) -> Self {
        Self {
            secure: app_env.is_production(),
        }
    }

    pub fn build(
        &self,
        name: &'static str,
        value: String,
        max_age_seconds: i64,
    ) -> Cookie<'static> {
        Cookie::build((name, value))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(Duration::seconds(max_age_seconds))
            .build()
    }
}

/// A single change to the caller's cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieMutation {
    Set {
        name: &'static str,
        value: String,
        max_age_seconds: i64,
    },
    Clear {
        name: &'static str,
    },
}

impl CookieMutation {
    pub fn set(name: &'static str, value: impl Into<String>, max_age_seconds: i64) -> Self {
        Self::Set {
            name,
            value: value.into(),
            max_age_seconds,
        }
    }

    pub fn clear(name: &'static str) -> Self {
        Self::Clear { name }
    }

    pub fn to_cookie(&self, policy: CookiePolicy) -> Cookie<'static> {
        match self {
            Self::Set {
                name,
                value,
                max_age_seconds,
            } => policy.build(*name, value.clone(), *max_age_seconds),
            Self::Clear { name } => {
                policy.build(*name, String::new(), DELETE_MAX_AGE_SECONDS)
            }
        }
    }
}

/// Record the mutations on the outgoing jar (emitted as `Set-Cookie` headers).
pub fn apply(jar: CookieJar, mutations: &[CookieMutation], policy: CookiePolicy) -> CookieJar {
    mutations
        .iter()
        .fold(jar, |jar, m| jar.add(m.to_cookie(policy)))
}

/// Mutations that start a session after a successful sign-in.
///
/// The username cookie lives as long as the refresh token it belongs to.
pub fn sign_in(tokens: &TokenPair, username: &str) -> Vec<CookieMutation> {
    vec![
        CookieMutation::set(
            ACCESS_TOKEN_COOKIE,
            tokens.access_token.clone(),
            tokens.access_token_expiration,
        ),
        CookieMutation::set(
            REFRESH_TOKEN_COOKIE,
            tokens.refresh_token.clone(),
            tokens.refresh_token_expiration,
        ),
        CookieMutation::set(USERNAME_COOKIE, username, tokens.refresh_token_expiration),
    ]
}

/// Mutations that end a session: all three cookies are cleared.
pub fn clear_session() -> Vec<CookieMutation> {
    vec![
        CookieMutation::clear(ACCESS_TOKEN_COOKIE),
        CookieMutation::clear(REFRESH_TOKEN_COOKIE),
        CookieMutation::clear(USERNAME_COOKIE),
    ]
}
