/*!
 * Session context extractor
 *
 * Responsibility:
 * - Session Guard を通過したリクエストのコンテキスト（SessionCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 */

mod core;
mod types;

pub use self::core::SessionCtxExtractor;
pub use self::types::{SessionCtx, profile_path};
