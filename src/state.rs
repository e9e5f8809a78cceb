/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - upstreams: backend service clients, guard: Session Guard (refresher + CookiePolicy)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - リクエスト間で共有する可変状態は持たない (セッションは全て Cookie 側)
 */
use std::sync::Arc;

use crate::services::session::{CookiePolicy, SessionGuard};
use crate::services::upstream::Upstreams;

#[derive(Clone, Debug)]
pub struct AppState {
    pub upstreams: Upstreams,
    pub guard: SessionGuard,
}

impl AppState {
    pub fn new(upstreams: Upstreams, guard: SessionGuard) -> Self {
        Self { upstreams, guard }
    }

    /// The usual wiring: the auth client doubles as the guard's refresher.
    pub fn with_auth_refresher(upstreams: Upstreams, policy: CookiePolicy) -> Self {
        let guard = SessionGuard::new(Arc::new(upstreams.auth.clone()), policy);
        Self::new(upstreams, guard)
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        self.guard.policy()
    }
}
