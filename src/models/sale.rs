// src/models/sale.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Enums (Mapeando o Postgres) ---

// Receita e lucro "realizados" consideram apenas Paid; o volume bruto
// de unidades vendidas considera todos os status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,    // Pago
    Pending, // Aguardando pagamento
    Partial, // Pago parcialmente
    Overdue, // Vencido
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,

    #[schema(example = "Jean Claude")]
    pub customer_name: String,

    pub product_id: Option<Uuid>,

    // Nome congelado no momento da venda (o produto pode mudar depois)
    #[schema(example = "Água mineral 500ml")]
    pub product_name: String,

    #[schema(example = 3)]
    pub quantity: i32,

    #[schema(example = "1500.00")]
    pub amount: Decimal,

    // cost_price = unit_price do produto * quantity, congelado na venda
    #[schema(example = "1050.00")]
    pub cost_price: Decimal,

    // profit = amount - cost_price, congelado na venda
    #[schema(example = "450.00")]
    pub profit: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-07-15")]
    pub sale_date: NaiveDate,

    pub payment_status: PaymentStatus,

    // Preenchido apenas para vendas não pagas
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    #[validate(length(min = 1, message = "O nome do cliente é obrigatório"))]
    pub customer_name: String,

    pub product_id: Uuid,

    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero"))]
    pub quantity: i32,

    pub amount: Decimal,

    #[schema(value_type = String, format = Date)]
    pub sale_date: NaiveDate,

    pub payment_status: PaymentStatus,

    // Opcional; para vendas não pagas o padrão é sale_date + 30 dias
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSaleStatusRequest {
    pub payment_status: PaymentStatus,
}
