// src/handlers/debtors.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::debtor::{CreateDebtorRequest, Debtor},
};

// GET /api/debtors
#[utoipa::path(
    get,
    path = "/api/debtors",
    tag = "Debtors",
    responses(
        (status = 200, description = "Todos os devedores, vencimento mais próximo primeiro", body = Vec<Debtor>)
    )
)]
pub async fn list_debtors(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let debtors = app_state.debtor_service.list_debtors().await?;

    Ok((StatusCode::OK, Json(debtors)))
}

// GET /api/debtors/recent
#[utoipa::path(
    get,
    path = "/api/debtors/recent",
    tag = "Debtors",
    responses(
        (status = 200, description = "Os 5 devedores ativos com vencimento mais próximo", body = Vec<Debtor>)
    )
)]
pub async fn recent_debtors(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let debtors = app_state.debtor_service.recent_debtors().await?;

    Ok((StatusCode::OK, Json(debtors)))
}

// POST /api/debtors
#[utoipa::path(
    post,
    path = "/api/debtors",
    tag = "Debtors",
    request_body = CreateDebtorRequest,
    responses(
        (status = 201, description = "Devedor criado com status pending", body = Debtor),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_debtor(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateDebtorRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let debtor = app_state.debtor_service.create_debtor(payload).await?;

    Ok((StatusCode::CREATED, Json(debtor)))
}

// POST /api/debtors/{id}/pay
#[utoipa::path(
    post,
    path = "/api/debtors/{id}/pay",
    tag = "Debtors",
    params(("id" = Uuid, Path, description = "ID do devedor")),
    responses(
        (status = 200, description = "Devedor quitado; registro de pagamento gravado", body = Debtor),
        (status = 404, description = "Devedor não encontrado")
    )
)]
pub async fn pay_debtor(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let debtor = app_state.debtor_service.mark_as_paid(id, today).await?;

    Ok((StatusCode::OK, Json(debtor)))
}
