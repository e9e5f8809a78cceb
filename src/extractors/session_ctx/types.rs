/*
 * Responsibility
 * - Page handler から見える「セッション確認済みコンテキスト」の型
 * - middleware::session が Session Guard を通した後に request extensions に格納する
 *
 * Notes
 * - token の検証自体は backend (auth service) の責務。ここは Cookie から読めた値を運ぶだけ
 */

use url::Url;

/// path 組み立て用の仮 origin (`.path()` しか使わない)
const PATH_BASE: &str = "http://localhost/";

/// `/profile/{username}/...` を組み立てる。各 segment は percent-encode される
/// (`?`, `#`, `/`, 空白, 制御文字が Location / href を壊さないように)
pub fn profile_path(username: &str, rest: &[&str]) -> String {
    let build = || -> Option<String> {
        let mut url = Url::parse(PATH_BASE).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("profile")
            .push(username)
            .extend(rest);
        Some(url.path().to_string())
    };
    build().unwrap_or_else(|| "/".to_string())
}

/// Session Guard を通過したリクエストに付与されるコンテキスト
///
/// - `access_token` は backend 呼び出しに使う Bearer (refresh 直後なら新しい token)
/// - `username` は username Cookie の値 (Navigation の Profile リンクに使う)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCtx {
    pub access_token: Option<String>,
    pub username: Option<String>,
}

impl SessionCtx {
    pub fn new(access_token: Option<String>, username: Option<String>) -> Self {
        Self {
            access_token,
            username,
        }
    }

    pub fn profile_path(&self) -> String {
        match &self.username {
            Some(name) => profile_path(name, &[]),
            None => "/".to_string(),
        }
    }
}
