// src/services/product_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::ProductRepository,
    models::product::{CreateProductRequest, Product},
};

#[derive(Clone)]
pub struct ProductService {
    product_repo: ProductRepository,
}

impl ProductService {
    pub fn new(product_repo: ProductRepository) -> Self {
        Self { product_repo }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.product_repo.find_all().await
    }

    // O total da compra é calculado aqui, nunca aceito do cliente.
    pub async fn create_product(
        &self,
        payload: CreateProductRequest,
    ) -> Result<Product, AppError> {
        let total_price = payload.unit_price * Decimal::from(payload.quantity);

        self.product_repo
            .create(
                &payload.name,
                payload.unit_price,
                payload.quantity,
                total_price,
                payload.purchase_date,
                &payload.category,
            )
            .await
    }
}
