// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::{DashboardSummary, StatusCountEntry},
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Totais financeiros e contagens de tickets", body = DashboardSummary)
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.dashboard_service.summary())))
}

// GET /api/dashboard/status-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/status-chart",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contagem por status, na ordem do fluxo de trabalho, zeros inclusos", body = Vec<StatusCountEntry>)
    )
)]
pub async fn get_status_chart(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(app_state.dashboard_service.status_chart()),
    ))
}
