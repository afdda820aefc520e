#![allow(dead_code)]

//! Test infrastructure for router-level tests

use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::Value;

use insights_api::app::{build_router, build_state};
use insights_api::config::Config;

pub const SECRET: &str = "integration-test-secret-0123456789";
pub const OTHER_SECRET: &str = "some-other-secret-9876543210";

pub fn test_config(extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("JWT_SECRET".to_string(), SECRET.to_string()),
        ("MOCK_RNG_SEED".to_string(), "42".to_string()),
        (
            "ALLOWED_ORIGINS".to_string(),
            "http://localhost:3000".to_string(),
        ),
    ]);
    for (k, v) in extra {
        vars.insert(k.to_string(), v.to_string());
    }

    Config::from_vars(|key| vars.get(key).cloned()).expect("valid test config")
}

pub fn create_test_app(extra: &[(&str, &str)]) -> Router {
    let config = test_config(extra);
    let state = build_state(&config).expect("valid test state");
    build_router(state, &config)
}

pub fn sign_with(claims: &Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("sign test token")
}

pub fn sign(claims: &Value) -> String {
    sign_with(claims, SECRET)
}

pub fn valid_token() -> String {
    sign(&serde_json::json!({
        "id": "u1",
        "email": "a@x.com",
        "exp": chrono::Utc::now().timestamp() + 3600,
    }))
}

pub fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
