/*
 * Responsibility
 * - URL 構造の定義
 *   - 公開: /, /health
 *   - Bearer 必須: /api/predictions/..., /api/insights/...
 * - 認証の適用範囲はここで決める (middleware::auth::apply)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware;
use crate::state::AppState;

use handlers::{
    health::{health, root},
    insights::{budget_recommendations, financial_health, spending_insights},
    predictions::{categorize_transaction, spending_forecast},
};

fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/spending-forecast", post(spending_forecast))
        .route("/transaction-categorization", post(categorize_transaction))
}

fn insight_routes() -> Router<AppState> {
    Router::new()
        .route("/spending-insights", get(spending_insights))
        .route("/budget-recommendations", get(budget_recommendations))
        .route("/financial-health", get(financial_health))
}

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/predictions", prediction_routes())
        .nest("/insights", insight_routes());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", middleware::auth::apply(protected, state))
}
