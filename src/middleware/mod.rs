/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::apply (Bearer 検証), cors::apply, http::apply
 */
pub mod auth;
pub mod cors;
pub mod http;
