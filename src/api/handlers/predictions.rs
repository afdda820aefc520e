/*
 * Responsibility
 * - /api/predictions 系 handler
 * - Query を DTO で受けて validate → services::mock::predictions を呼ぶ
 * - 認証済みであることは CurrentUser extractor で保証される
 */
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::Utc;

use crate::{
    api::{
        dto::predictions::{CategorizeQuery, SpendingForecastQuery},
        extractors::CurrentUser,
    },
    error::AppError,
    services::mock::predictions::{self, SpendingForecast, TransactionPrediction},
    state::AppState,
};

pub async fn spending_forecast(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<SpendingForecastQuery>, QueryRejection>,
) -> Result<Json<Vec<SpendingForecast>>, AppError> {
    let Query(query) = query?;
    query
        .validate()
        .map_err(|m| AppError::bad_request("BAD_REQUEST", m))?;

    let mut rng = state.rng.rng();
    let forecasts = predictions::spending_forecast(query.months_ahead, Utc::now(), &mut rng);

    tracing::debug!(
        user_id = %user.subject_id(),
        months_ahead = query.months_ahead,
        "spending forecast generated"
    );

    Ok(Json(forecasts))
}

pub async fn categorize_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<CategorizeQuery>, QueryRejection>,
) -> Result<Json<TransactionPrediction>, AppError> {
    let Query(query) = query?;
    query
        .validate()
        .map_err(|m| AppError::bad_request("BAD_REQUEST", m))?;

    let mut rng = state.rng.rng();
    let prediction =
        predictions::categorize_transaction(&query.description, query.amount, Utc::now(), &mut rng);

    tracing::debug!(
        user_id = %user.subject_id(),
        category = prediction.category,
        "transaction categorized"
    );

    Ok(Json(prediction))
}
