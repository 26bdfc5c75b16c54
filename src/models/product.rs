// src/models/product.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Um produto em estoque. Cada linha também registra a compra do lote:
// total_price = unit_price * quantity no momento da compra, e entra como
// custo de inventário nas despesas do painel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,

    #[schema(example = "Água mineral 500ml")]
    pub name: String,

    #[schema(example = "350.00")]
    pub unit_price: Decimal,

    // Estoque atual (decrementado a cada venda)
    #[schema(example = 24)]
    pub quantity: i32,

    #[schema(example = "8400.00")]
    pub total_price: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-07-01")]
    pub purchase_date: NaiveDate,

    #[schema(example = "Bebidas")]
    pub category: String,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "O nome do produto é obrigatório"))]
    pub name: String,

    pub unit_price: Decimal,

    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero"))]
    pub quantity: i32,

    #[schema(value_type = String, format = Date)]
    pub purchase_date: NaiveDate,

    #[validate(length(min = 1, message = "A categoria é obrigatória"))]
    pub category: String,
}
