/*
 * Responsibility
 * - /api/insights 系 handler (静的データ + 乱数スコア)
 */
use axum::{Json, extract::State};

use crate::{
    api::extractors::CurrentUser,
    services::mock::insights::{self, BudgetRecommendation, FinancialHealthScore, SpendingInsight},
    state::AppState,
};

pub async fn spending_insights(CurrentUser(user): CurrentUser) -> Json<Vec<SpendingInsight>> {
    tracing::debug!(user_id = %user.subject_id(), "spending insights");
    Json(insights::spending_insights())
}

pub async fn budget_recommendations(
    CurrentUser(user): CurrentUser,
) -> Json<Vec<BudgetRecommendation>> {
    tracing::debug!(user_id = %user.subject_id(), "budget recommendations");
    Json(insights::budget_recommendations())
}

pub async fn financial_health(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<FinancialHealthScore> {
    let mut rng = state.rng.rng();
    let health = insights::financial_health(&mut rng);

    tracing::debug!(user_id = %user.subject_id(), score = health.score, "financial health");

    Json(health)
}
