use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{FilterCriteria, Product, RecommendationRequest, RecommendationResult},
    services::recommendations,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "lotto-match-api" }))
}

/// List every lottery in the catalog
pub async fn list_lotteries(State(state): State<AppState>) -> Json<Vec<Product>> {
    let cancel = state.request_token();
    Json(state.catalog.list_products(&cancel).await)
}

/// Get a single lottery by its code
pub async fn get_lottery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let cancel = state.request_token();
    let product = state.catalog.get_product(&id, &cancel).await?;
    Ok(Json(product))
}

/// Rank active lotteries against the caller's preferences
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResult>> {
    if let Some(field) = request.preferences.first_invalid_range() {
        return Err(AppError::InvalidInput(format!(
            "{} must satisfy 0 <= min <= max",
            field
        )));
    }

    let cancel = state.request_token();
    let products = state.catalog.active_products(&cancel).await;
    let result = recommendations::recommend(
        &products,
        &request.preferences,
        &request.previous_lottery_ids,
    );

    tracing::info!(
        candidates = products.len(),
        matches = result.total_matches,
        "Generated recommendations"
    );

    Ok(Json(result))
}

/// Lotteries matching every provided filter
pub async fn filter_lotteries(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> AppResult<Json<Vec<Product>>> {
    if let Some(field) = criteria.first_invalid_range() {
        return Err(AppError::InvalidInput(format!(
            "{} must satisfy 0 <= min <= max",
            field
        )));
    }

    let cancel = state.request_token();
    Ok(Json(state.catalog.filter_products(&criteria, &cancel).await))
}
