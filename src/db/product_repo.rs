// src/db/product_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::product::Product};

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Listagem: compras mais recentes primeiro.
    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products ORDER BY purchase_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn create(
        &self,
        name: &str,
        unit_price: Decimal,
        quantity: i32,
        total_price: Decimal,
        purchase_date: NaiveDate,
        category: &str,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, unit_price, quantity, total_price, purchase_date, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(unit_price)
        .bind(quantity)
        .bind(total_price)
        .bind(purchase_date)
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    // Trava a linha dentro da transação da venda.
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(product)
    }

    // Baixa de estoque; o chamador já validou a quantidade disponível.
    pub async fn decrement_stock<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        quantity: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("UPDATE products SET quantity = quantity - $2 WHERE id = $1")
            .bind(id)
            .bind(quantity)
            .execute(executor)
            .await?;

        Ok(())
    }
}
