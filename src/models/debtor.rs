// src/models/debtor.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// "Ativo" = status != paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "debtor_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DebtorStatus {
    Pending,
    Partial,
    Overdue,
    Paid,
}

// Um devedor criado a partir de uma venda herda o status dela.
impl From<crate::models::sale::PaymentStatus> for DebtorStatus {
    fn from(status: crate::models::sale::PaymentStatus) -> Self {
        use crate::models::sale::PaymentStatus;
        match status {
            PaymentStatus::Paid => DebtorStatus::Paid,
            PaymentStatus::Pending => DebtorStatus::Pending,
            PaymentStatus::Partial => DebtorStatus::Partial,
            PaymentStatus::Overdue => DebtorStatus::Overdue,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Debtor {
    pub id: Uuid,

    #[schema(example = "Jean Claude")]
    pub customer_name: String,

    // Snapshot "Nome do produto (quantidade)" criado junto com a venda
    #[schema(example = "Água mineral 500ml (3)")]
    pub product: String,

    #[schema(example = "1500.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-08-14")]
    pub due_date: NaiveDate,

    pub status: DebtorStatus,

    pub created_at: Option<DateTime<Utc>>,
}

// Registro de quitação gravado quando um devedor é marcado como pago.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub debtor_id: Uuid,

    #[schema(example = "1500.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date)]
    pub payment_date: NaiveDate,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDebtorRequest {
    #[validate(length(min = 1, message = "O nome do cliente é obrigatório"))]
    pub customer_name: String,

    #[validate(length(min = 1, message = "O produto é obrigatório"))]
    pub product: String,

    pub amount: Decimal,

    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
}
