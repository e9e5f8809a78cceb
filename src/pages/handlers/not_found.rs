use axum::response::Response;

use super::error_page;

pub async fn not_found() -> Response {
    error_page(404, None)
}
