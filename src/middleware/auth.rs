//! Bearer token 検証 → Identity を request extensions に入れる
//!
//! - `Authorization: Bearer <jwt>` を取り出し、AuthService::verify で検証する
//! - 失敗はすべて 401 + `WWW-Authenticate: Bearer` (理由はログにだけ残す)
//! - handler 側は `CurrentUser` extractor で Identity を受け取る

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// 保護したい Router に認証を掛ける。
///
/// `route_layer` なので、存在しない path は 401 ではなく 404 のまま。
///
/// 例：
/// ```ignore
/// let protected = middleware::auth::apply(api::protected_routes(), state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

/// `Authorization` header から token 部分を取り出す。
///
/// scheme は大文字小文字を区別しない。空 token は None。
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        tracing::warn!(path = %req.uri().path(), "missing or malformed bearer credentials");
        return Err(AppError::missing_credentials());
    };

    let identity = match state.auth.verify(token) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(
                error = %err,
                path = %req.uri().path(),
                "access token verification failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(user_id = %identity.subject_id(), role = %identity.role(), "authenticated");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
