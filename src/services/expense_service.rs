// src/services/expense_service.rs

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::ExpenseRepository,
    models::expense::{CreateExpenseRequest, Expense},
};

#[derive(Clone)]
pub struct ExpenseService {
    expense_repo: ExpenseRepository,
}

impl ExpenseService {
    pub fn new(expense_repo: ExpenseRepository) -> Self {
        Self { expense_repo }
    }

    pub async fn list_expenses(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Expense>, AppError> {
        self.expense_repo.find_all(from, to).await
    }

    pub async fn create_expense(
        &self,
        payload: CreateExpenseRequest,
    ) -> Result<Expense, AppError> {
        self.expense_repo
            .create(
                &payload.description,
                payload.amount,
                payload.expense_date,
                &payload.category,
            )
            .await
    }
}
