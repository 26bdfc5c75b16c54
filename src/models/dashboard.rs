// src/models/dashboard.rs

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::models::{debtor::DebtorStatus, sale::PaymentStatus};

// --- Janela de datas ---

// Janela inclusiva [from, to] usada em todas as agregações.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    // Janela de comparação: mesmo comprimento, imediatamente anterior.
    // Desloca ambos os limites por (to - from) dias; uma janela de um
    // único dia (from == to) degenera na própria janela.
    pub fn previous(&self) -> DateWindow {
        let shift = Duration::days((self.to - self.from).num_days().abs());
        DateWindow {
            from: self.from - shift,
            to: self.to - shift,
        }
    }
}

// --- Granularidade do gráfico ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
}

// --- Parâmetros de consulta com janela de datas ---
// Compartilhado pelos endpoints de listagem e pelas estatísticas.

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    #[param(value_type = Option<String>, format = Date)]
    pub from: Option<NaiveDate>,
    #[param(value_type = Option<String>, format = Date)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ChartQuery {
    #[param(value_type = Option<String>, format = Date)]
    pub from: Option<NaiveDate>,
    #[param(value_type = Option<String>, format = Date)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub group_by: Granularity,
}

// --- Visões de registro consumidas pelo motor de agregação ---
// Colunas mínimas, lidas da loja de dados e nunca gravadas.

#[derive(Debug, Clone, FromRow)]
pub struct SaleRecord {
    pub amount: Decimal,
    pub profit: Decimal,
    pub quantity: i32,
    pub sale_date: NaiveDate,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, FromRow)]
pub struct ExpenseRecord {
    pub amount: Decimal,
    pub expense_date: NaiveDate,
}

#[derive(Debug, Clone, FromRow)]
pub struct PurchaseRecord {
    pub total_price: Decimal,
    pub purchase_date: NaiveDate,
}

#[derive(Debug, Clone, FromRow)]
pub struct DebtorRecord {
    pub due_date: NaiveDate,
    pub status: DebtorStatus,
}

// --- Resultados derivados ---

// Os cards do topo do painel. Os campos *_change são percentuais com
// sinal, relativos à janela de comparação.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[schema(example = "125000.00")]
    pub total_revenue: Decimal,
    #[schema(example = "74000.00")]
    pub total_expenses: Decimal,
    #[schema(example = "38000.00")]
    pub total_profit: Decimal,
    #[schema(example = 152)]
    pub products_sold: i64,
    #[schema(example = 4)]
    pub active_debtors: i64,
    pub revenue_change: f64,
    pub expenses_change: f64,
    pub profit_change: f64,
    pub products_sold_change: f64,
    pub debtors_change: f64,
}

// Um ponto da série temporal do gráfico.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChartPoint {
    #[schema(example = "Jul 15")]
    pub name: String,
    #[schema(example = "1500.00")]
    pub sales: Decimal,
    #[schema(example = "0.00")]
    pub expenses: Decimal,
    #[schema(example = "450.00")]
    pub profit: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, dia).unwrap()
    }

    #[test]
    fn previous_window_has_same_length_and_precedes() {
        let window = DateWindow::new(d(2026, 7, 1), d(2026, 7, 31));
        let prev = window.previous();

        assert_eq!(prev.from, d(2026, 6, 1));
        assert_eq!(prev.to, d(2026, 7, 1));
        assert_eq!(
            (prev.to - prev.from).num_days(),
            (window.to - window.from).num_days()
        );
    }

    #[test]
    fn previous_window_crosses_year_boundary() {
        let window = DateWindow::new(d(2026, 1, 1), d(2026, 1, 10));
        let prev = window.previous();

        assert_eq!(prev.from, d(2025, 12, 23));
        assert_eq!(prev.to, d(2026, 1, 1));
    }

    #[test]
    fn single_day_window_degenerates_to_itself() {
        let window = DateWindow::new(d(2026, 7, 15), d(2026, 7, 15));
        assert_eq!(window.previous(), window);
    }
}
