// src/handlers/sales.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::DateRangeQuery,
    models::sale::{CreateSaleRequest, Sale, UpdateSaleStatusRequest},
};

// GET /api/sales
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sales",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Vendas na janela (limites opcionais), mais recentes primeiro", body = Vec<Sale>)
    )
)]
pub async fn list_sales(
    State(app_state): State<AppState>,
    Query(params): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let sales = app_state
        .sales_service
        .list_sales(params.from, params.to)
        .await?;

    Ok((StatusCode::OK, Json(sales)))
}

// GET /api/sales/recent
#[utoipa::path(
    get,
    path = "/api/sales/recent",
    tag = "Sales",
    responses(
        (status = 200, description = "As 5 vendas mais recentes", body = Vec<Sale>)
    )
)]
pub async fn recent_sales(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let sales = app_state.sales_service.recent_sales().await?;

    Ok((StatusCode::OK, Json(sales)))
}

// POST /api/sales
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sales",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Venda registrada com baixa de estoque; venda não paga vira devedor", body = Sale),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Produto não encontrado"),
        (status = 409, description = "Estoque insuficiente")
    )
)]
pub async fn create_sale(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateSaleRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sale = app_state.sales_service.create_sale(payload).await?;

    Ok((StatusCode::CREATED, Json(sale)))
}

// PATCH /api/sales/{id}/status
#[utoipa::path(
    patch,
    path = "/api/sales/{id}/status",
    tag = "Sales",
    params(("id" = Uuid, Path, description = "ID da venda")),
    request_body = UpdateSaleStatusRequest,
    responses(
        (status = 200, description = "Status atualizado; pagar também quita os devedores da venda", body = Sale),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn update_sale_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSaleStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let sale = app_state
        .sales_service
        .update_status(id, payload.payment_status)
        .await?;

    Ok((StatusCode::OK, Json(sale)))
}
