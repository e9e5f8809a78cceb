/*
 * Responsibility
 * - ドメイン寄りのサービス層 (HTTP handler から呼ばれる)
 *   - session: Session Guard と Cookie 方針
 *   - upstream: auth/user/movie/rating backend への HTTP client
 */
pub mod session;
pub mod upstream;
