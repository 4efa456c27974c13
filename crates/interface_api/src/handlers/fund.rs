//! Fund handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::debug;
use validator::Validate;

use core_kernel::FundId;
use domain_fund::Fund;

use crate::dto::fund::*;
use crate::{error::ApiError, AppState};

fn find_fund(state: &AppState, id: &FundId) -> Result<Fund, ApiError> {
    state.repository.fund(id).ok_or_else(|| {
        debug!(fund = %id, "Unknown fund requested");
        ApiError::NotFound(format!("fund {} not found", id))
    })
}

/// Lists funds with their latest NAV
pub async fn list_funds(State(state): State<AppState>) -> Json<Vec<FundResponse>> {
    let funds = state
        .repository
        .funds()
        .into_iter()
        .map(|fund| {
            let latest = state.repository.latest_price(&fund.id);
            FundResponse::new(fund, latest)
        })
        .collect();
    Json(funds)
}

/// The most recent `days` NAV samples of a fund, newest first
pub async fn price_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<PriceHistoryResponse>, ApiError> {
    let Query(query) = query?;
    query.validate()?;

    let fund = find_fund(&state, &FundId::from(id.as_str()))?;
    let prices = state.repository.price_history(&fund.id, query.days());

    Ok(Json(PriceHistoryResponse {
        fund_id: fund.id,
        fund_name: fund.name,
        prices,
    }))
}

/// Industry weights of a fund's top holdings
pub async fn industries(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IndustryResponse>, ApiError> {
    let fund = find_fund(&state, &FundId::from(id.as_str()))?;
    let industries = state.attribution.industry_distribution(&fund.id)?;

    Ok(Json(IndustryResponse {
        fund_id: fund.id,
        fund_name: fund.name,
        industries,
    }))
}
