/*
 * Responsibility
 * - ページ (HTML) の handler
 * - backend 呼び出し → view 組み立て → Html / Redirect を返す
 * - エラー時は JSON ではなくエラーページを返す (error_page)
 */
pub mod logout;
pub mod not_found;
pub mod profile;
pub mod signin;
pub mod static_pages;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::extractors::SessionCtx;
use crate::pages::views::{error::error_content, layout};

/// Render the error page for an upstream/HTTP status code.
///
/// Anything that is not a client/server error status is shown as 500.
pub fn error_page(code: u16, session: Option<&SessionCtx>) -> Response {
    let status = StatusCode::from_u16(code)
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let title = status.canonical_reason().unwrap_or("Error");
    (
        status,
        layout::page(title, session, &error_content(status.as_u16())),
    )
        .into_response()
}
