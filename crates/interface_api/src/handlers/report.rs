//! Report handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::error;

use core_kernel::UserId;
use domain_portfolio::DailyReport;

use crate::dto::report::ReportQuery;
use crate::{error::ApiError, AppState};

const REPORT_FAILURE: &str = "生成日报时发生错误";

/// Today's report for `userId`, defaulting to the configured user
pub async fn daily_report(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<DailyReport>, ApiError> {
    let Query(query) = query?;
    let user_id = match query.user_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => UserId::from(id),
        _ => state.config.default_user(),
    };

    let report = state
        .reports
        .daily_report(&user_id, state.config.today())
        .map_err(|e| {
            error!(user = %user_id, error = %e, "Failed to build daily report");
            ApiError::Internal(REPORT_FAILURE.to_string())
        })?;

    Ok(Json(report))
}
