/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: AuthService (起動時に構築、以降 read-only)
 *   - rng: mock payload 用の乱数ソース
 * - Clone 前提で持つ (内部は Arc/Copy)
 */
use std::sync::Arc;

use crate::services::{auth::AuthService, mock::RngSource};

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub rng: RngSource,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, rng: RngSource) -> Self {
        Self { auth, rng }
    }
}
