// src/db/expense_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{common::error::AppError, models::expense::Expense};

#[derive(Clone)]
pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT * FROM expenses
            WHERE ($1::date IS NULL OR expense_date >= $1)
              AND ($2::date IS NULL OR expense_date <= $2)
            ORDER BY expense_date DESC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn create(
        &self,
        description: &str,
        amount: Decimal,
        expense_date: NaiveDate,
        category: &str,
    ) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (description, amount, expense_date, category)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(description)
        .bind(amount)
        .bind(expense_date)
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }
}
