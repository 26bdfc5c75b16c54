// src/services/sales_service.rs

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{DebtorRepository, ProductRepository, SaleRepository},
    models::sale::{CreateSaleRequest, PaymentStatus, Sale},
};

#[derive(Clone)]
pub struct SalesService {
    pool: PgPool,
    sale_repo: SaleRepository,
    product_repo: ProductRepository,
    debtor_repo: DebtorRepository,
}

impl SalesService {
    pub fn new(
        pool: PgPool,
        sale_repo: SaleRepository,
        product_repo: ProductRepository,
        debtor_repo: DebtorRepository,
    ) -> Self {
        Self {
            pool,
            sale_repo,
            product_repo,
            debtor_repo,
        }
    }

    pub async fn list_sales(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Sale>, AppError> {
        self.sale_repo.find_all(from, to).await
    }

    pub async fn recent_sales(&self) -> Result<Vec<Sale>, AppError> {
        self.sale_repo.find_recent(5).await
    }

    // Registra uma venda. Tudo na mesma transação: baixa de estoque,
    // custo/lucro congelados e, para venda não paga, o devedor espelho.
    pub async fn create_sale(&self, payload: CreateSaleRequest) -> Result<Sale, AppError> {
        let mut tx = self.pool.begin().await?;

        // 1. Busca e trava o produto
        let product = self
            .product_repo
            .find_by_id_for_update(&mut *tx, payload.product_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        if product.quantity < payload.quantity {
            return Err(AppError::InsufficientStock);
        }

        // 2. Custo e lucro no momento da venda
        let cost_price = product.unit_price * Decimal::from(payload.quantity);
        let profit = payload.amount - cost_price;

        // 3. Baixa de estoque
        self.product_repo
            .decrement_stock(&mut *tx, product.id, payload.quantity)
            .await?;

        // 4. Vencimento: informado ou 30 dias após a venda; só gravado
        //    em vendas não pagas
        let due_date = payload
            .due_date
            .unwrap_or(payload.sale_date + Duration::days(30));
        let sale_due_date =
            (payload.payment_status != PaymentStatus::Paid).then_some(due_date);

        let sale = self
            .sale_repo
            .insert(
                &mut *tx,
                &payload.customer_name,
                product.id,
                &product.name,
                payload.quantity,
                payload.amount,
                cost_price,
                profit,
                payload.sale_date,
                payload.payment_status,
                sale_due_date,
            )
            .await?;

        // 5. Venda não paga entra na lista de devedores
        if payload.payment_status != PaymentStatus::Paid {
            let snapshot = format!("{} ({})", product.name, payload.quantity);
            self.debtor_repo
                .insert(
                    &mut *tx,
                    &payload.customer_name,
                    &snapshot,
                    payload.amount,
                    due_date,
                    payload.payment_status.into(),
                )
                .await?;
        }

        tx.commit().await?;
        Ok(sale)
    }

    // Atualiza o status de pagamento; marcar como pago também quita os
    // devedores criados junto com a venda.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<Sale, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut sale = self
            .sale_repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or(AppError::SaleNotFound)?;

        self.sale_repo.update_status(&mut *tx, id, status).await?;

        if status == PaymentStatus::Paid {
            let snapshot = format!("{} ({})", sale.product_name, sale.quantity);
            self.debtor_repo
                .settle_matching(&mut *tx, &sale.customer_name, &snapshot)
                .await?;
        }

        tx.commit().await?;

        sale.payment_status = status;
        Ok(sale)
    }
}
