/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - http: request-id / trace / timeout, cors, security_headers, session: Session Guard
 */
pub mod cors;
pub mod http;
pub mod security_headers;
pub mod session;
