/*
 * Responsibility
 * - Session Guard (access/refresh token cookie の判定と refresh) の公開インターフェース
 * - Cookie の名前・属性 (CookiePolicy) はここに集約する
 */
pub mod cookies;
pub mod guard;
pub mod types;

pub use cookies::CookiePolicy;
pub use guard::{SessionGuard, TokenRefresher};
pub use types::{RefreshResponse, SessionCookies, TokenPair};
