/*
 * Responsibility
 * - server-rendered ページ (HTML) の公開インターフェース
 * - routes() の re-export
 */
pub mod handlers;
mod routes;
pub mod views;

pub use routes::routes;
