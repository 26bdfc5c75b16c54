// src/db/debtor_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::debtor::{Debtor, DebtorStatus, Payment},
};

#[derive(Clone)]
pub struct DebtorRepository {
    pool: PgPool,
}

impl DebtorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Debtor>, AppError> {
        let debtors = sqlx::query_as::<_, Debtor>(
            "SELECT * FROM debtors ORDER BY due_date ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(debtors)
    }

    // Os 5 devedores ativos com vencimento mais próximo.
    pub async fn find_recent_active(&self, limit: i64) -> Result<Vec<Debtor>, AppError> {
        let debtors = sqlx::query_as::<_, Debtor>(
            r#"
            SELECT * FROM debtors
            WHERE status <> $1
            ORDER BY due_date ASC
            LIMIT $2
            "#,
        )
        .bind(DebtorStatus::Paid)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(debtors)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Debtor>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let debtor = sqlx::query_as::<_, Debtor>("SELECT * FROM debtors WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(debtor)
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        customer_name: &str,
        product: &str,
        amount: Decimal,
        due_date: NaiveDate,
        status: DebtorStatus,
    ) -> Result<Debtor, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let debtor = sqlx::query_as::<_, Debtor>(
            r#"
            INSERT INTO debtors (customer_name, product, amount, due_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(customer_name)
        .bind(product)
        .bind(amount)
        .bind(due_date)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(debtor)
    }

    pub async fn mark_paid<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE debtors SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(DebtorStatus::Paid)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    // Quita os devedores criados junto com uma venda; o snapshot de
    // produto tem o formato "Nome (quantidade)".
    pub async fn settle_matching<'e, E>(
        &self,
        executor: E,
        customer_name: &str,
        product_snapshot: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE debtors SET status = $3 WHERE customer_name = $1 AND product LIKE $2",
        )
        .bind(customer_name)
        .bind(product_snapshot)
        .bind(DebtorStatus::Paid)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn insert_payment<'e, E>(
        &self,
        executor: E,
        debtor_id: Uuid,
        amount: Decimal,
        payment_date: NaiveDate,
    ) -> Result<Payment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (debtor_id, amount, payment_date)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(debtor_id)
        .bind(amount)
        .bind(payment_date)
        .fetch_one(executor)
        .await?;

        Ok(payment)
    }
}
