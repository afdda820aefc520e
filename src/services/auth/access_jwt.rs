use std::collections::HashSet;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

use crate::services::auth::identity::Identity;

/// Errors returned by bearer-token verification.
///
/// Both variants end up as the same 401 at the HTTP boundary; the split only
/// exists so logs can tell a forged/expired token from an incomplete one.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad signature, malformed token, unexpected `alg`, expired `exp` or future `nbf`.
    #[error("invalid or expired token: {0}")]
    TokenInvalid(#[from] jsonwebtoken::errors::Error),

    /// Signature verified but a required claim is missing or blank.
    #[error("missing required '{0}' claim")]
    Authentication(&'static str),
}

/// Errors raised while building an `AuthService` at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthBuildError {
    #[error("unsupported signing algorithm: {0:?}")]
    UnsupportedAlgorithm(Algorithm),
}

/// Bearer token claims used by this service.
///
/// Registered claims (`exp`, `iat`, ...) are checked by `jsonwebtoken::Validation`
/// and are not deserialized here.
#[derive(Debug, Clone, Deserialize)]
struct AccessTokenClaims {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// HMAC access-token verifier.
///
/// - Built once at startup from `Config`, then shared read-only behind an `Arc`.
/// - Key material is not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    /// `algorithm` must be one of the HMAC family; anything else is a startup error.
    pub fn new(
        secret: &[u8],
        algorithm: Algorithm,
        leeway_seconds: u64,
    ) -> Result<Self, AuthBuildError> {
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(AuthBuildError::UnsupportedAlgorithm(algorithm));
        }

        let mut validation = Validation::new(algorithm);
        // `exp` and `nbf` are enforced when present but not required.
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = leeway_seconds;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Verify the token and resolve the caller.
    ///
    /// `jsonwebtoken::Validation` checks the signature, the header `alg`, `exp` and `nbf`.
    /// This method additionally requires non-blank `id` and `email` claims;
    /// `role` falls back to `"user"`.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        let subject_id = non_blank(claims.id).ok_or(AuthError::Authentication("id"))?;
        let email = non_blank(claims.email).ok_or(AuthError::Authentication("email"))?;

        Ok(Identity::new(subject_id, email, claims.role))
    }
}
