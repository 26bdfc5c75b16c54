// src/db/sale_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::sale::{PaymentStatus, Sale},
};

#[derive(Clone)]
pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Listagem com janela opcional (inclusiva nos dois limites).
    pub async fn find_all(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT * FROM sales
            WHERE ($1::date IS NULL OR sale_date >= $1)
              AND ($2::date IS NULL OR sale_date <= $2)
            ORDER BY sale_date DESC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    pub async fn find_recent(&self, limit: i64) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>(
            "SELECT * FROM sales ORDER BY sale_date DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Sale>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sale = sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(sale)
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        customer_name: &str,
        product_id: Uuid,
        product_name: &str,
        quantity: i32,
        amount: Decimal,
        cost_price: Decimal,
        profit: Decimal,
        sale_date: NaiveDate,
        payment_status: PaymentStatus,
        due_date: Option<NaiveDate>,
    ) -> Result<Sale, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (
                customer_name, product_id, product_name, quantity,
                amount, cost_price, profit, sale_date, payment_status, due_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(customer_name)
        .bind(product_id)
        .bind(product_name)
        .bind(quantity)
        .bind(amount)
        .bind(cost_price)
        .bind(profit)
        .bind(sale_date)
        .bind(payment_status)
        .bind(due_date)
        .fetch_one(executor)
        .await?;

        Ok(sale)
    }

    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE sales SET payment_status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
