// src/services/debtor_service.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::DebtorRepository,
    models::debtor::{CreateDebtorRequest, Debtor, DebtorStatus},
};

#[derive(Clone)]
pub struct DebtorService {
    pool: PgPool,
    debtor_repo: DebtorRepository,
}

impl DebtorService {
    pub fn new(pool: PgPool, debtor_repo: DebtorRepository) -> Self {
        Self { pool, debtor_repo }
    }

    pub async fn list_debtors(&self) -> Result<Vec<Debtor>, AppError> {
        self.debtor_repo.find_all().await
    }

    pub async fn recent_debtors(&self) -> Result<Vec<Debtor>, AppError> {
        self.debtor_repo.find_recent_active(5).await
    }

    pub async fn create_debtor(
        &self,
        payload: CreateDebtorRequest,
    ) -> Result<Debtor, AppError> {
        self.debtor_repo
            .insert(
                &self.pool,
                &payload.customer_name,
                &payload.product,
                payload.amount,
                payload.due_date,
                DebtorStatus::Pending,
            )
            .await
    }

    // Quita o devedor e grava o registro de pagamento na mesma
    // transação. `today` vem do handler.
    pub async fn mark_as_paid(&self, id: Uuid, today: NaiveDate) -> Result<Debtor, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut debtor = self
            .debtor_repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or(AppError::DebtorNotFound)?;

        self.debtor_repo.mark_paid(&mut *tx, id).await?;
        self.debtor_repo
            .insert_payment(&mut *tx, id, debtor.amount, today)
            .await?;

        tx.commit().await?;

        debtor.status = DebtorStatus::Paid;
        Ok(debtor)
    }
}
