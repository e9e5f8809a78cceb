use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;

use crate::state::AppState;

use super::SessionCtx;

/// Handler で、 SessionCtx を受け取るための extractor
/// middleware が SessionCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は /signin へ redirect する（middleware 未設定）
pub struct SessionCtxExtractor(pub SessionCtx);

impl FromRequestParts<AppState> for SessionCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionCtx>()
            .cloned()
            .map(SessionCtxExtractor)
            .ok_or(Redirect::temporary("/signin"))
    }
}
