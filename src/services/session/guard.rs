//! Session Guard.
//!
//! Decides whether a page request carries a usable session:
//!
//! 1. access-token cookie present → authenticated, nothing to write
//! 2. refresh-token cookie present → one refresh call to the Token Service
//!    - 200: authenticated, access/refresh cookies rotated
//!    - anything else (including transport failure): not authenticated,
//!      refresh cookie (and username cookie, if sent) cleared
//! 3. neither → not authenticated, nothing to write
//!
//! "Not authenticated" is a normal outcome. It is never an error here;
//! the caller decides whether to redirect.

use std::sync::Arc;

use async_trait::async_trait;
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use crate::services::session::cookies::{
    self, ACCESS_TOKEN_COOKIE, CookieMutation, CookiePolicy, REFRESH_TOKEN_COOKIE,
    USERNAME_COOKIE,
};
use crate::services::session::types::{RefreshResponse, SessionCookies, TokenPair};
use crate::services::upstream::UpstreamError;

/// Exchanges a refresh token for a new token pair.
///
/// Implemented by `AuthClient` over HTTP; tests substitute a fake.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(
        &self,
        refresh_token: &str,
        username: Option<&str>,
    ) -> Result<RefreshResponse, UpstreamError>;
}

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDecision {
    pub authenticated: bool,
    pub mutations: Vec<CookieMutation>,
    /// Access token usable for the rest of this request (fresh one after a refresh).
    pub access_token: Option<String>,
    pub username: Option<String>,
}

impl SessionDecision {
    fn authenticated(access_token: String, username: Option<String>) -> Self {
        Self {
            authenticated: true,
            mutations: Vec::new(),
            access_token: Some(access_token),
            username,
        }
    }

    fn anonymous(mutations: Vec<CookieMutation>) -> Self {
        Self {
            authenticated: false,
            mutations,
            access_token: None,
            username: None,
        }
    }
}

/// `(cookies) → (authenticated?, cookie mutations)`, with at most one refresh call.
pub async fn check_session(
    refresher: &dyn TokenRefresher,
    cookies: &SessionCookies,
) -> SessionDecision {
    if let Some(access_token) = &cookies.access_token {
        return SessionDecision::authenticated(access_token.clone(), cookies.username.clone());
    }

    let Some(refresh_token) = &cookies.refresh_token else {
        return SessionDecision::anonymous(Vec::new());
    };

    let result = refresher
        .refresh(refresh_token, cookies.username.as_deref())
        .await;

    match result.map(RefreshResponse::into_tokens) {
        Ok(Some(tokens)) => {
            debug!(username = ?cookies.username, "session refreshed");
            let mut decision =
                SessionDecision::authenticated(tokens.access_token.clone(), cookies.username.clone());
            decision.mutations = rotation(&tokens);
            decision
        }
        Ok(None) => {
            debug!(username = ?cookies.username, "refresh token rejected");
            SessionDecision::anonymous(purge(cookies))
        }
        Err(err) => {
            warn!(error = %err, "token refresh failed");
            SessionDecision::anonymous(purge(cookies))
        }
    }
}

fn rotation(tokens: &TokenPair) -> Vec<CookieMutation> {
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
    ]
}

fn purge(cookies: &SessionCookies) -> Vec<CookieMutation> {
    let mut mutations = vec![CookieMutation::clear(REFRESH_TOKEN_COOKIE)];
    if cookies.username.is_some() {
        mutations.push(CookieMutation::clear(USERNAME_COOKIE));
    }
    mutations
}

/// The guard as used by the page middleware: refresher + cookie policy.
#[derive(Clone)]
pub struct SessionGuard {
    refresher: Arc<dyn TokenRefresher>,
    policy: CookiePolicy,
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("policy", &self.policy)
            .finish()
    }
}

impl SessionGuard {
    pub fn new(refresher: Arc<dyn TokenRefresher>, policy: CookiePolicy) -> Self {
        Self { refresher, policy }
    }

    pub fn policy(&self) -> CookiePolicy {
        self.policy
    }

    /// Run the check against the request jar and record the mutations on it.
    pub async fn check(&self, jar: CookieJar) -> (SessionDecision, CookieJar) {
        let cookies = SessionCookies::from_jar(&jar);
        let decision = check_session(self.refresher.as_ref(), &cookies).await;
        let jar = cookies::apply(jar, &decision.mutations, self.policy);
        (decision, jar)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use axum::http::{HeaderMap, HeaderValue, header};
    use axum_extra::extract::cookie::SameSite;

    use super::*;

    /// Scripted Token Service: returns `reply` and records every call.
    struct FakeRefresher {
        reply: Option<RefreshResponse>,
        calls: Mutex<Vec<(String, Option<String>)>>,
    }

    impl FakeRefresher {
        fn ok(access_ttl: i64, refresh_ttl: i64) -> Self {
            Self::replying(Some(RefreshResponse {
                status_code: 200,
                tokens: Some(TokenPair {
                    access_token: "new-access".into(),
                    access_token_expiration: access_ttl,
                    refresh_token: "new-refresh".into(),
                    refresh_token_expiration: refresh_ttl,
                }),
            }))
        }

        fn status(status_code: u16) -> Self {
            Self::replying(Some(RefreshResponse {
                status_code,
                tokens: None,
            }))
        }

        /// `None` simulates a transport failure.
        fn replying(reply: Option<RefreshResponse>) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TokenRefresher for FakeRefresher {
        async fn refresh(
            &self,
            refresh_token: &str,
            username: Option<&str>,
        ) -> Result<RefreshResponse, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push((refresh_token.to_string(), username.map(str::to_string)));
            self.reply.clone().ok_or(UpstreamError::Decode {
                service: "auth",
                status: 502,
            })
        }
    }

    fn cookies(access: Option<&str>, refresh: Option<&str>, username: Option<&str>) -> SessionCookies {
        SessionCookies {
            access_token: access.map(str::to_string),
            refresh_token: refresh.map(str::to_string),
            username: username.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn access_cookie_is_enough() {
        let fake = FakeRefresher::status(500);

        let decision = check_session(&fake, &cookies(Some("a"), None, None)).await;

        assert!(decision.authenticated);
        assert!(decision.mutations.is_empty());
        assert_eq!(decision.access_token.as_deref(), Some("a"));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_refresh_rotates_exactly_two_cookies() {
        let fake = FakeRefresher::ok(900, 604800);

        let decision = check_session(&fake, &cookies(None, Some("old"), Some("alice"))).await;

        assert!(decision.authenticated);
        assert_eq!(
            decision.mutations,
            vec![
                CookieMutation::set(ACCESS_TOKEN_COOKIE, "new-access", 900),
                CookieMutation::set(REFRESH_TOKEN_COOKIE, "new-refresh", 604800),
            ]
        );
        assert_eq!(decision.access_token.as_deref(), Some("new-access"));
        assert_eq!(
            fake.calls.lock().unwrap().as_slice(),
            &[("old".to_string(), Some("alice".to_string()))]
        );
    }

    #[tokio::test]
    async fn rejected_refresh_clears_refresh_cookie() {
        let fake = FakeRefresher::status(401);

        let decision = check_session(&fake, &cookies(None, Some("old"), None)).await;

        assert!(!decision.authenticated);
        assert_eq!(
            decision.mutations,
            vec![CookieMutation::clear(REFRESH_TOKEN_COOKIE)]
        );
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn rejected_refresh_also_clears_tracked_username() {
        let fake = FakeRefresher::status(500);

        let decision = check_session(&fake, &cookies(None, Some("old"), Some("bob"))).await;

        assert!(!decision.authenticated);
        assert_eq!(
            decision.mutations,
            vec![
                CookieMutation::clear(REFRESH_TOKEN_COOKIE),
                CookieMutation::clear(USERNAME_COOKIE),
            ]
        );
    }

    #[tokio::test]
    async fn transport_failure_collapses_to_unauthenticated() {
        let fake = FakeRefresher::replying(None);

        let decision = check_session(&fake, &cookies(None, Some("old"), None)).await;

        assert!(!decision.authenticated);
        assert_eq!(
            decision.mutations,
            vec![CookieMutation::clear(REFRESH_TOKEN_COOKIE)]
        );
    }

    #[tokio::test]
    async fn no_cookies_means_no_call_and_no_mutation() {
        let fake = FakeRefresher::ok(1, 1);

        let decision = check_session(&fake, &SessionCookies::default()).await;

        assert!(!decision.authenticated);
        assert!(decision.mutations.is_empty());
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn guard_writes_policy_cookies_to_jar() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("MRSRefreshToken=old"));
        let jar = CookieJar::from_headers(&headers);

        for secure in [false, true] {
            let guard = SessionGuard::new(
                Arc::new(FakeRefresher::ok(900, 604800)),
                CookiePolicy { secure },
            );
            let (decision, jar) = guard.check(jar.clone()).await;

            assert!(decision.authenticated);
            let access = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
            assert_eq!(access.value(), "new-access");
            assert_eq!(access.http_only(), Some(true));
            assert_eq!(access.same_site(), Some(SameSite::Lax));
            assert_eq!(access.secure() == Some(true), secure);
            assert_eq!(jar.get(REFRESH_TOKEN_COOKIE).unwrap().value(), "new-refresh");
        }
    }
}
