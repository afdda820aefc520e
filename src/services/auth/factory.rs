//! Factory: build `AuthService` from application `Config`.

use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::auth::AuthService;

pub fn build_auth_service(config: &Config) -> Result<Arc<AuthService>, ConfigError> {
    let auth = AuthService::new(
        config.jwt_secret.as_bytes(),
        config.jwt_algorithm,
        config.access_token_leeway_seconds,
    )
    .map_err(|e| {
        tracing::error!(error = %e, "failed to build token verifier");
        ConfigError::Invalid("JWT_ALGORITHM")
    })?;

    Ok(Arc::new(auth))
}
