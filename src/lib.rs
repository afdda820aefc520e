/*
 * Responsibility
 * - crate の module 構成
 * - integration test から Router / Config / AppState を組み立てられるように公開する
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
