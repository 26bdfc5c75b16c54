// src/handlers/expenses.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::DateRangeQuery,
    models::expense::{CreateExpenseRequest, Expense},
};

// GET /api/expenses
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Expenses",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Despesas na janela (limites opcionais), mais recentes primeiro", body = Vec<Expense>)
    )
)]
pub async fn list_expenses(
    State(app_state): State<AppState>,
    Query(params): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let expenses = app_state
        .expense_service
        .list_expenses(params.from, params.to)
        .await?;

    Ok((StatusCode::OK, Json(expenses)))
}

// POST /api/expenses
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 201, description = "Despesa registrada", body = Expense),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_expense(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let expense = app_state.expense_service.create_expense(payload).await?;

    Ok((StatusCode::CREATED, Json(expense)))
}
