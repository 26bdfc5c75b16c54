// src/handlers/products.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::product::{CreateProductRequest, Product},
};

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Todos os produtos, compras mais recentes primeiro", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_service.list_products().await?;

    Ok((StatusCode::OK, Json(products)))
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Produto criado; total_price calculado no servidor", body = Product),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state.product_service.create_product(payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}
