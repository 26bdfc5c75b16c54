// src/models/expense.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Despesa operacional, independente das compras de estoque.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,

    #[schema(example = "Aluguel da loja")]
    pub description: String,

    #[schema(example = "50000.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-07-01")]
    pub expense_date: NaiveDate,

    #[schema(example = "Fixas")]
    pub category: String,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub description: String,

    pub amount: Decimal,

    #[schema(value_type = String, format = Date)]
    pub expense_date: NaiveDate,

    #[validate(length(min = 1, message = "A categoria é obrigatória"))]
    pub category: String,
}
