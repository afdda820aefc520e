/*
 * Responsibility
 * - 環境変数 (.env 含む) の読み込み: JWT_SECRET, JWT_ALGORITHM, ALLOWED_ORIGINS など
 * - 設定値のバリデーション (不足・不正なら起動失敗)
 * - 起動時に一度だけ構築し、以降は read-only で共有する
 */
use std::fmt;
use std::net::SocketAddr;

use jsonwebtoken::Algorithm;

/// Development fallback for `JWT_SECRET`. Never accepted in production.
pub const INSECURE_DEV_SECRET: &str = "default_secret_change_in_production";

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub access_token_leeway_seconds: u64,

    // None: OS entropy per request
    pub mock_rng_seed: Option<u64>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the secret
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("access_token_leeway_seconds", &self.access_token_leeway_seconds)
            .field("mock_rng_seed", &self.mock_rng_seed)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match var("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 8000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(var("APP_ENV").as_deref());

        let cors_allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let jwt_secret = match var("JWT_SECRET") {
            Some(secret) if secret.is_empty() => return Err(ConfigError::Invalid("JWT_SECRET")),
            Some(secret) => secret,
            None if app_env.is_production() => return Err(ConfigError::Missing("JWT_SECRET")),
            None => INSECURE_DEV_SECRET.to_string(),
        };
        if app_env.is_production() && jwt_secret == INSECURE_DEV_SECRET {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        let jwt_algorithm = match var("JWT_ALGORITHM").as_deref().map(str::trim) {
            None | Some("HS256") => Algorithm::HS256,
            Some(_) => return Err(ConfigError::Invalid("JWT_ALGORITHM")),
        };

        let access_token_leeway_seconds = var("ACCESS_TOKEN_LEEWAY_SECONDS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);

        let mock_rng_seed = match var("MOCK_RNG_SEED") {
            Some(s) => Some(
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Invalid("MOCK_RNG_SEED"))?,
            ),
            None => None,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            jwt_secret,
            jwt_algorithm,
            access_token_leeway_seconds,
            mock_rng_seed,
        })
    }

    /// True when the server runs on the built-in development secret.
    pub fn uses_insecure_secret(&self) -> bool {
        self.jwt_secret == INSECURE_DEV_SECRET
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_in_development() {
        let config = load(&[]).unwrap();

        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.addr.port(), 8000);
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.jwt_algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_leeway_seconds, 0);
        assert_eq!(config.mock_rng_seed, None);
        assert!(config.uses_insecure_secret());
    }

    #[test]
    fn production_requires_secret() {
        let err = load(&[("APP_ENV", "production")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn production_rejects_dev_default_secret() {
        let err = load(&[("APP_ENV", "prod"), ("JWT_SECRET", INSECURE_DEV_SECRET)]).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("JWT_SECRET"));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let err = load(&[("JWT_SECRET", "")]).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("JWT_SECRET"));
    }

    #[test]
    fn production_with_real_secret() {
        let config = load(&[("APP_ENV", "Production"), ("JWT_SECRET", "s3cr3t")]).unwrap();

        assert!(config.app_env.is_production());
        assert!(!config.uses_insecure_secret());
    }

    #[test]
    fn only_hs256_is_accepted() {
        assert!(load(&[("JWT_ALGORITHM", "HS256")]).is_ok());
        assert_eq!(
            load(&[("JWT_ALGORITHM", "RS256")]).unwrap_err(),
            ConfigError::Invalid("JWT_ALGORITHM")
        );
    }

    #[test]
    fn allowed_origins_are_split_and_trimmed() {
        let config = load(&[(
            "ALLOWED_ORIGINS",
            "https://app.example.com, http://localhost:3000,,",
        )])
        .unwrap();

        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://app.example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn invalid_port_and_seed_fail() {
        assert_eq!(
            load(&[("PORT", "http")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            load(&[("MOCK_RNG_SEED", "-1")]).unwrap_err(),
            ConfigError::Invalid("MOCK_RNG_SEED")
        );
        assert_eq!(load(&[("MOCK_RNG_SEED", "42")]).unwrap().mock_rng_seed, Some(42));
    }

    #[test]
    fn debug_output_hides_secret() {
        let config = load(&[("JWT_SECRET", "do-not-print-me")]).unwrap();
        assert!(!format!("{config:?}").contains("do-not-print-me"));
    }
}
