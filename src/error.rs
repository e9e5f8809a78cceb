/*
 * Responsibility
 * - アプリ共通の AppError 定義 (主に /api 系の JSON レスポンス用)
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - UpstreamError を統一的に変換
 *
 * Notes
 * - ページ (HTML) 側はここを使わず、pages::views::error でエラーページを描画する
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("bad gateway")]
    BadGateway,

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::BadGateway => StatusCode::BAD_GATEWAY,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::InvalidRequest(_) => "BAD_REQUEST",
            AppError::BadGateway => "BAD_GATEWAY",
            AppError::Internal => "INTERNAL",
        };

        let body = ErrorResponseBody {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::BaseUrl { .. } => {
                tracing::error!(error = %e, "misconfigured upstream");
                AppError::Internal
            }
            _ => {
                tracing::warn!(error = %e, "upstream call failed");
                AppError::BadGateway
            }
        }
    }
}
