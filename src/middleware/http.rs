//! HTTP-level middleware (cross-cutting concerns).
//!
//! Applies to every route, public or protected:
//! - Request-Id generation + propagation (`x-request-id`)
//! - Access log spans carrying method, path and request id
//! - Body size limit (1 MiB)
//! - Global timeout (30 s, answered with 408)

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::error_handling::HandleErrorLayer;
use axum::http::{Request, StatusCode, header::HeaderName};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

const REQUEST_ID_HEADER: &str = "x-request-id";
const BODY_LIMIT_BYTES: usize = 1024 * 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Size and time bounds enforced on every request.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            body_limit_bytes: BODY_LIMIT_BYTES,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

async fn handle_layer_error(err: BoxError) -> StatusCode {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("request timed out");
        StatusCode::REQUEST_TIMEOUT
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn apply(router: Router) -> Router {
    apply_with(router, HttpLimits::default())
}

pub fn apply_with(router: Router, limits: HttpLimits) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace = TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "http",
            method = %req.method(),
            path = %req.uri().path(),
            request_id = %request_id,
        )
    });

    let layers = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_layer_error))
        // Set before tracing so the span can carry it.
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(trace)
        .layer(RequestBodyLimitLayer::new(limits.body_limit_bytes))
        .layer(TimeoutLayer::new(limits.request_timeout));

    router.layer(layers)
}

#[cfg(test)]
mod tests {
    use axum::http::header;
    use axum::routing::{get, post};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let router = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_millis(500)).await;
                    "done"
                }),
            )
            .route("/echo", post(|body: String| async move { body }));

        apply_with(
            router,
            HttpLimits {
                body_limit_bytes: 16,
                request_timeout: Duration::from_millis(20),
            },
        )
    }

    fn post_echo(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn slow_handler_is_answered_with_request_timeout() {
        let request = Request::builder().uri("/slow").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected_with_payload_too_large() {
        let response = app()
            .oneshot(post_echo("this body is longer than sixteen bytes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn body_within_limit_reaches_handler() {
        let response = app().oneshot(post_echo("small")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn non_timeout_layer_error_maps_to_internal_server_error() {
        let err: BoxError = "boom".into();

        assert_eq!(
            handle_layer_error(err).await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn default_limits_are_one_mebibyte_and_thirty_seconds() {
        let limits = HttpLimits::default();

        assert_eq!(limits.body_limit_bytes, 1024 * 1024);
        assert_eq!(limits.request_timeout, Duration::from_secs(30));
    }
}
