// src/db/dashboard_repo.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::dashboard::{DebtorRecord, ExpenseRecord, PurchaseRecord, SaleRecord},
    services::dashboard_service::DashboardStore,
};

// Implementação Postgres da capacidade de leitura do painel. Só as
// colunas que o motor consome; o padrão `($n::date IS NULL OR ...)`
// cobre janelas totalmente abertas, parciais e fechadas com uma única
// consulta parametrizada.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn sales_in(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<SaleRecord>, AppError> {
        let records = sqlx::query_as::<_, SaleRecord>(
            r#"
            SELECT amount, profit, quantity, sale_date, payment_status
            FROM sales
            WHERE ($1::date IS NULL OR sale_date >= $1)
              AND ($2::date IS NULL OR sale_date <= $2)
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn expenses_in(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ExpenseRecord>, AppError> {
        let records = sqlx::query_as::<_, ExpenseRecord>(
            r#"
            SELECT amount, expense_date
            FROM expenses
            WHERE ($1::date IS NULL OR expense_date >= $1)
              AND ($2::date IS NULL OR expense_date <= $2)
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    // Cada linha de products registra a compra do lote; total_price entra
    // como custo de inventário.
    async fn purchases_in(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<PurchaseRecord>, AppError> {
        let records = sqlx::query_as::<_, PurchaseRecord>(
            r#"
            SELECT total_price, purchase_date
            FROM products
            WHERE ($1::date IS NULL OR purchase_date >= $1)
              AND ($2::date IS NULL OR purchase_date <= $2)
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn debtors(&self) -> Result<Vec<DebtorRecord>, AppError> {
        let records = sqlx::query_as::<_, DebtorRecord>(
            "SELECT due_date, status FROM debtors",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
