use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use super::cookies::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, USERNAME_COOKIE};

/// The session as carried by the caller's cookies.
///
/// Empty cookie values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub username: Option<String>,
}

impl SessionCookies {
    pub fn from_jar(jar: &CookieJar) -> Self {
        let read = |name: &str| {
            jar.get(name)
                .map(|c| c.value().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            access_token: read(ACCESS_TOKEN_COOKIE),
            refresh_token: read(REFRESH_TOKEN_COOKIE),
            username: read(USERNAME_COOKIE),
        }
    }
}

/// Token pair issued by the Token Service (`/login`, `/refresh`).
///
/// Lifetimes are seconds and passed straight through to cookie max-age.
/// Every field is required: a 200 without a refresh token cannot start or
/// rotate a session, so it fails to decode instead of writing an empty cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub access_token_expiration: i64,
    pub refresh_token: String,
    pub refresh_token_expiration: i64,
}

/// Result of one refresh attempt: the Token Service status and, on 200, the new pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshResponse {
    pub status_code: u16,
    pub tokens: Option<TokenPair>,
}

impl RefreshResponse {
    /// The new pair, only when the Token Service answered 200 with a body.
    pub fn into_tokens(self) -> Option<TokenPair> {
        if self.status_code == 200 {
            self.tokens
        } else {
            None
        }
    }
}
