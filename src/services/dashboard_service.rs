// src/services/dashboard_service.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::dashboard::{
        ChartPoint, DashboardStats, DateWindow, DebtorRecord, ExpenseRecord, Granularity,
        PurchaseRecord, SaleRecord,
    },
    models::debtor::DebtorStatus,
    models::sale::PaymentStatus,
};

// A capacidade de leitura que o motor consome da camada de persistência.
// Janelas são inclusivas nos dois limites; um limite ausente deixa aquele
// lado aberto. A implementação de produção fica em db/dashboard_repo.rs;
// os testes usam uma implementação em memória.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn sales_in(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<SaleRecord>, AppError>;

    async fn expenses_in(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ExpenseRecord>, AppError>;

    async fn purchases_in(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<PurchaseRecord>, AppError>;

    async fn debtors(&self) -> Result<Vec<DebtorRecord>, AppError>;
}

// =========================================================================
//  Funções de agregação
// =========================================================================
// "Realizado" (receita/lucro) considera apenas vendas pagas; o volume
// bruto de unidades considera todos os status. A assimetria é
// intencional: receita reconhecida vs. atividade registrada.

fn realized_revenue(sales: &[SaleRecord]) -> Decimal {
    sales
        .iter()
        .filter(|s| s.payment_status == PaymentStatus::Paid)
        .map(|s| s.amount)
        .sum()
}

fn realized_profit(sales: &[SaleRecord]) -> Decimal {
    sales
        .iter()
        .filter(|s| s.payment_status == PaymentStatus::Paid)
        .map(|s| s.profit)
        .sum()
}

fn gross_units_sold(sales: &[SaleRecord]) -> i64 {
    sales.iter().map(|s| i64::from(s.quantity)).sum()
}

// Despesas totais = despesas operacionais + custo de compra de estoque.
fn total_expenses(expenses: &[ExpenseRecord], purchases: &[PurchaseRecord]) -> Decimal {
    let operating: Decimal = expenses.iter().map(|e| e.amount).sum();
    let inventory: Decimal = purchases.iter().map(|p| p.total_price).sum();
    operating + inventory
}

// Devedores ativos = status != paid. Com `as_of`, restringe a
// due_date <= as_of: é um retrato pontual usado apenas para a janela de
// comparação, contando os devedores como apareciam naquele momento.
fn active_debtors(debtors: &[DebtorRecord], as_of: Option<NaiveDate>) -> i64 {
    debtors
        .iter()
        .filter(|d| d.status != DebtorStatus::Paid)
        .filter(|d| as_of.is_none_or(|limit| d.due_date <= limit))
        .count() as i64
}

// =========================================================================
//  Variação percentual
// =========================================================================

// Com base zero: 100 se houve crescimento, 0 caso contrário. O
// denominador em valor absoluto mantém o sinal do resultado alinhado à
// direção da variação mesmo com base negativa.
fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 { 100.0 } else { 0.0 }
    } else {
        ((current - previous) / previous.abs()) * 100.0
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

// =========================================================================
//  Resolução de janelas
// =========================================================================
// `today` é injetado pelo chamador; o motor nunca lê o relógio.

fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

// Estatísticas: limite ausente cai no limite do mês corrente.
fn resolve_stats_window(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> DateWindow {
    DateWindow::new(
        from.unwrap_or_else(|| month_start(today)),
        to.unwrap_or_else(|| month_end(today)),
    )
}

// Gráfico: sem nenhum limite, últimos 7 dias; com um só, o outro é hoje.
fn resolve_chart_window(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> DateWindow {
    match (from, to) {
        (None, None) => DateWindow::new(today - Duration::days(7), today),
        (from, to) => DateWindow::new(from.unwrap_or(today), to.unwrap_or(today)),
    }
}

// =========================================================================
//  Série do gráfico
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum BucketKey {
    Day(NaiveDate),
    Week(i32, u32),
    Month(i32, u32),
}

fn bucket_key(date: NaiveDate, granularity: Granularity) -> BucketKey {
    match granularity {
        Granularity::Day => BucketKey::Day(date),
        Granularity::Week => {
            let week = date.iso_week();
            BucketKey::Week(week.year(), week.week())
        }
        Granularity::Month => BucketKey::Month(date.year(), date.month()),
    }
}

// Rótulos com nomes de mês em inglês abreviado, fixos independentemente
// do locale do servidor.
fn bucket_label(key: &BucketKey) -> String {
    match *key {
        BucketKey::Day(date) => format!("{} {}", date.format("%b"), date.day()),
        BucketKey::Week(_, week) => format!("Week {}", week),
        BucketKey::Month(year, month) => NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| first.format("%b").to_string())
            .unwrap_or_default(),
    }
}

// Une as três projeções (vendas, despesas, compras de estoque), agrupa
// pela chave do balde e soma. O BTreeMap garante ordem cronológica
// ascendente e ausência de chaves duplicadas. As vendas entram aqui sem
// filtro de payment_status, diferente da receita realizada dos cards.
fn bucketize(
    granularity: Granularity,
    sales: &[SaleRecord],
    expenses: &[ExpenseRecord],
    purchases: &[PurchaseRecord],
) -> Vec<ChartPoint> {
    #[derive(Default)]
    struct Accum {
        sales: Decimal,
        expenses: Decimal,
        profit: Decimal,
    }

    let mut buckets: BTreeMap<BucketKey, Accum> = BTreeMap::new();

    for sale in sales {
        let slot = buckets
            .entry(bucket_key(sale.sale_date, granularity))
            .or_default();
        slot.sales += sale.amount;
        slot.profit += sale.profit;
    }
    for expense in expenses {
        let slot = buckets
            .entry(bucket_key(expense.expense_date, granularity))
            .or_default();
        slot.expenses += expense.amount;
    }
    for purchase in purchases {
        let slot = buckets
            .entry(bucket_key(purchase.purchase_date, granularity))
            .or_default();
        slot.expenses += purchase.total_price;
    }

    buckets
        .into_iter()
        .map(|(key, accum)| ChartPoint {
            name: bucket_label(&key),
            sales: accum.sales,
            expenses: accum.expenses,
            profit: accum.profit,
        })
        .collect()
}

// =========================================================================
//  Serviço
// =========================================================================

// Agregados de uma única janela, antes do pareamento com a comparação.
struct Snapshot {
    revenue: Decimal,
    expenses: Decimal,
    profit: Decimal,
    units_sold: i64,
    active_debtors: i64,
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DashboardStore>) -> Self {
        Self { store }
    }

    // Cards do painel: janela corrente + janela de comparação derivada.
    // Falhas da loja de dados sobem como Err; quem decide degradar para
    // zeros é o handler.
    pub async fn get_stats(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<DashboardStats, AppError> {
        let window = resolve_stats_window(from, to, today);
        let previous_window = window.previous();

        // O retrato de devedores da comparação é "como estava no fim da
        // janela anterior", por isso o as_of = previous_window.to.
        let (current, previous) = tokio::try_join!(
            self.snapshot(window, None),
            self.snapshot(previous_window, Some(previous_window.to)),
        )?;

        Ok(DashboardStats {
            total_revenue: current.revenue,
            total_expenses: current.expenses,
            total_profit: current.profit,
            products_sold: current.units_sold,
            active_debtors: current.active_debtors,
            revenue_change: percent_change(to_f64(current.revenue), to_f64(previous.revenue)),
            expenses_change: percent_change(to_f64(current.expenses), to_f64(previous.expenses)),
            profit_change: percent_change(to_f64(current.profit), to_f64(previous.profit)),
            products_sold_change: percent_change(
                current.units_sold as f64,
                previous.units_sold as f64,
            ),
            debtors_change: percent_change(
                current.active_debtors as f64,
                previous.active_debtors as f64,
            ),
        })
    }

    // Série temporal {sales, expenses, profit} por balde de tempo.
    pub async fn get_chart_data(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        group_by: Granularity,
        today: NaiveDate,
    ) -> Result<Vec<ChartPoint>, AppError> {
        let window = resolve_chart_window(from, to, today);

        let (sales, expenses, purchases) = tokio::try_join!(
            self.store.sales_in(Some(window.from), Some(window.to)),
            self.store.expenses_in(Some(window.from), Some(window.to)),
            self.store.purchases_in(Some(window.from), Some(window.to)),
        )?;

        Ok(bucketize(group_by, &sales, &expenses, &purchases))
    }

    async fn snapshot(
        &self,
        window: DateWindow,
        debtors_as_of: Option<NaiveDate>,
    ) -> Result<Snapshot, AppError> {
        let (sales, expenses, purchases, debtors) = tokio::try_join!(
            self.store.sales_in(Some(window.from), Some(window.to)),
            self.store.expenses_in(Some(window.from), Some(window.to)),
            self.store.purchases_in(Some(window.from), Some(window.to)),
            self.store.debtors(),
        )?;

        Ok(Snapshot {
            revenue: realized_revenue(&sales),
            expenses: total_expenses(&expenses, &purchases),
            profit: realized_profit(&sales),
            units_sold: gross_units_sold(&sales),
            active_debtors: active_debtors(&debtors, debtors_as_of),
        })
    }
}

// =========================================================================
//  Testes
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn sale(date: NaiveDate, amount: i64, profit: i64, qty: i32, status: PaymentStatus) -> SaleRecord {
        SaleRecord {
            amount: dec(amount),
            profit: dec(profit),
            quantity: qty,
            sale_date: date,
            payment_status: status,
        }
    }

    fn debtor(due: NaiveDate, status: DebtorStatus) -> DebtorRecord {
        DebtorRecord {
            due_date: due,
            status,
        }
    }

    // Loja em memória que implementa o mesmo contrato de janela
    // inclusiva da implementação Postgres.
    #[derive(Default)]
    struct InMemoryStore {
        sales: Vec<SaleRecord>,
        expenses: Vec<ExpenseRecord>,
        purchases: Vec<PurchaseRecord>,
        debtors: Vec<DebtorRecord>,
    }

    fn within(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.is_none_or(|f| date >= f) && to.is_none_or(|t| date <= t)
    }

    #[async_trait]
    impl DashboardStore for InMemoryStore {
        async fn sales_in(
            &self,
            from: Option<NaiveDate>,
            to: Option<NaiveDate>,
        ) -> Result<Vec<SaleRecord>, AppError> {
            Ok(self
                .sales
                .iter()
                .filter(|s| within(s.sale_date, from, to))
                .cloned()
                .collect())
        }

        async fn expenses_in(
            &self,
            from: Option<NaiveDate>,
            to: Option<NaiveDate>,
        ) -> Result<Vec<ExpenseRecord>, AppError> {
            Ok(self
                .expenses
                .iter()
                .filter(|e| within(e.expense_date, from, to))
                .cloned()
                .collect())
        }

        async fn purchases_in(
            &self,
            from: Option<NaiveDate>,
            to: Option<NaiveDate>,
        ) -> Result<Vec<PurchaseRecord>, AppError> {
            Ok(self
                .purchases
                .iter()
                .filter(|p| within(p.purchase_date, from, to))
                .cloned()
                .collect())
        }

        async fn debtors(&self) -> Result<Vec<DebtorRecord>, AppError> {
            Ok(self.debtors.clone())
        }
    }

    // Loja que falha em qualquer leitura.
    struct FailingStore;

    #[async_trait]
    impl DashboardStore for FailingStore {
        async fn sales_in(
            &self,
            _from: Option<NaiveDate>,
            _to: Option<NaiveDate>,
        ) -> Result<Vec<SaleRecord>, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolClosed))
        }

        async fn expenses_in(
            &self,
            _from: Option<NaiveDate>,
            _to: Option<NaiveDate>,
        ) -> Result<Vec<ExpenseRecord>, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolClosed))
        }

        async fn purchases_in(
            &self,
            _from: Option<NaiveDate>,
            _to: Option<NaiveDate>,
        ) -> Result<Vec<PurchaseRecord>, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolClosed))
        }

        async fn debtors(&self) -> Result<Vec<DebtorRecord>, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolClosed))
        }
    }

    // --- Variação percentual ---

    #[test]
    fn percent_change_with_zero_baseline() {
        assert_eq!(percent_change(150.0, 0.0), 100.0);
        assert_eq!(percent_change(0.0, 0.0), 0.0);
    }

    #[test]
    fn percent_change_signed() {
        assert_eq!(percent_change(150.0, 100.0), 50.0);
        assert_eq!(percent_change(50.0, 100.0), -50.0);
    }

    #[test]
    fn percent_change_negative_baseline_keeps_direction() {
        // Base negativa: o sinal continua refletindo a direção da variação.
        assert_eq!(percent_change(50.0, -100.0), 150.0);
    }

    // --- Agregações ---

    #[test]
    fn realized_aggregates_count_only_paid_sales() {
        let sales = vec![
            sale(d(2026, 7, 10), 1500, 450, 3, PaymentStatus::Paid),
            sale(d(2026, 7, 12), 1000, 300, 5, PaymentStatus::Pending),
            sale(d(2026, 7, 13), 800, 100, 2, PaymentStatus::Overdue),
        ];

        assert_eq!(realized_revenue(&sales), dec(1500));
        assert_eq!(realized_profit(&sales), dec(450));
    }

    #[test]
    fn gross_units_count_every_payment_status() {
        let sales = vec![
            sale(d(2026, 7, 10), 1500, 450, 3, PaymentStatus::Paid),
            sale(d(2026, 7, 12), 1000, 300, 5, PaymentStatus::Pending),
        ];

        assert_eq!(gross_units_sold(&sales), 8);
    }

    #[test]
    fn total_expenses_adds_both_sources() {
        let expenses = vec![
            ExpenseRecord { amount: dec(200), expense_date: d(2026, 7, 5) },
        ];
        let purchases = vec![
            PurchaseRecord { total_price: dec(300), purchase_date: d(2026, 7, 6) },
        ];

        assert_eq!(total_expenses(&expenses, &purchases), dec(500));
        // Alterar uma fonte muda o total exatamente por aquele delta.
        assert_eq!(total_expenses(&expenses, &[]), dec(200));
        assert_eq!(total_expenses(&[], &purchases), dec(300));
    }

    #[test]
    fn active_debtors_excludes_paid_and_honors_as_of() {
        let debtors = vec![
            debtor(d(2026, 5, 30), DebtorStatus::Pending),
            debtor(d(2026, 7, 20), DebtorStatus::Overdue),
            debtor(d(2026, 7, 1), DebtorStatus::Paid),
        ];

        // Sem as_of: todos os não pagos.
        assert_eq!(active_debtors(&debtors, None), 2);
        // Retrato em 1/jul: só o vencimento de maio já existia.
        assert_eq!(active_debtors(&debtors, Some(d(2026, 7, 1))), 1);
        assert_eq!(active_debtors(&[], None), 0);
    }

    // --- Resolução de janelas ---

    #[test]
    fn stats_window_defaults_to_current_month() {
        let window = resolve_stats_window(None, None, d(2026, 7, 15));
        assert_eq!(window, DateWindow::new(d(2026, 7, 1), d(2026, 7, 31)));

        let december = resolve_stats_window(None, None, d(2026, 12, 3));
        assert_eq!(december, DateWindow::new(d(2026, 12, 1), d(2026, 12, 31)));

        let leap_february = resolve_stats_window(None, None, d(2028, 2, 10));
        assert_eq!(leap_february, DateWindow::new(d(2028, 2, 1), d(2028, 2, 29)));
    }

    #[test]
    fn stats_window_fills_missing_bound_from_month() {
        let window = resolve_stats_window(Some(d(2026, 7, 10)), None, d(2026, 7, 15));
        assert_eq!(window, DateWindow::new(d(2026, 7, 10), d(2026, 7, 31)));
    }

    #[test]
    fn chart_window_defaults_to_trailing_week() {
        let window = resolve_chart_window(None, None, d(2026, 7, 15));
        assert_eq!(window, DateWindow::new(d(2026, 7, 8), d(2026, 7, 15)));

        // Um só limite informado: o outro é hoje.
        let partial = resolve_chart_window(Some(d(2026, 7, 1)), None, d(2026, 7, 15));
        assert_eq!(partial, DateWindow::new(d(2026, 7, 1), d(2026, 7, 15)));
    }

    // --- Bucketizer ---

    #[test]
    fn daily_buckets_in_ascending_order() {
        let sales = vec![sale(d(2026, 1, 5), 100, 20, 1, PaymentStatus::Paid)];
        let expenses = vec![
            ExpenseRecord { amount: dec(30), expense_date: d(2026, 1, 6) },
        ];

        let points = bucketize(Granularity::Day, &sales, &expenses, &[]);

        assert_eq!(
            points,
            vec![
                ChartPoint {
                    name: "Jan 5".into(),
                    sales: dec(100),
                    expenses: dec(0),
                    profit: dec(20),
                },
                ChartPoint {
                    name: "Jan 6".into(),
                    sales: dec(0),
                    expenses: dec(30),
                    profit: dec(0),
                },
            ]
        );
    }

    #[test]
    fn chart_sales_ignore_payment_status() {
        // Diferente dos cards: a série soma vendas pagas e não pagas.
        let sales = vec![
            sale(d(2026, 1, 5), 100, 20, 1, PaymentStatus::Paid),
            sale(d(2026, 1, 5), 50, 10, 1, PaymentStatus::Pending),
        ];

        let points = bucketize(Granularity::Day, &sales, &[], &[]);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].sales, dec(150));
        assert_eq!(points[0].profit, dec(30));
    }

    #[test]
    fn weekly_buckets_group_by_iso_week() {
        let sales = vec![
            sale(d(2026, 1, 5), 100, 20, 1, PaymentStatus::Paid),
            sale(d(2026, 1, 11), 40, 5, 1, PaymentStatus::Paid),
            sale(d(2026, 1, 12), 70, 10, 1, PaymentStatus::Paid),
        ];

        let points = bucketize(Granularity::Week, &sales, &[], &[]);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Week 2");
        assert_eq!(points[0].sales, dec(140));
        assert_eq!(points[1].name, "Week 3");
        assert_eq!(points[1].sales, dec(70));
    }

    #[test]
    fn monthly_buckets_use_short_month_names() {
        let sales = vec![
            sale(d(2026, 3, 10), 100, 20, 1, PaymentStatus::Paid),
            sale(d(2026, 3, 20), 50, 5, 1, PaymentStatus::Paid),
            sale(d(2026, 4, 2), 70, 10, 1, PaymentStatus::Paid),
        ];
        let purchases = vec![
            PurchaseRecord { total_price: dec(25), purchase_date: d(2026, 3, 15) },
        ];

        let points = bucketize(Granularity::Month, &sales, &[], &purchases);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Mar");
        assert_eq!(points[0].sales, dec(150));
        assert_eq!(points[0].expenses, dec(25));
        assert_eq!(points[1].name, "Apr");
    }

    #[test]
    fn empty_inputs_produce_empty_series() {
        assert!(bucketize(Granularity::Day, &[], &[], &[]).is_empty());
    }

    // --- Serviço completo ---

    fn july_store() -> InMemoryStore {
        InMemoryStore {
            sales: vec![
                // Janela corrente (julho)
                sale(d(2026, 7, 10), 1500, 450, 3, PaymentStatus::Paid),
                sale(d(2026, 7, 12), 1000, 300, 5, PaymentStatus::Pending),
                // Janela de comparação (junho)
                sale(d(2026, 6, 10), 1000, 200, 2, PaymentStatus::Paid),
            ],
            expenses: vec![
                ExpenseRecord { amount: dec(200), expense_date: d(2026, 7, 5) },
            ],
            purchases: vec![
                PurchaseRecord { total_price: dec(300), purchase_date: d(2026, 7, 6) },
            ],
            debtors: vec![
                debtor(d(2026, 5, 30), DebtorStatus::Pending),
                debtor(d(2026, 7, 20), DebtorStatus::Pending),
                debtor(d(2026, 7, 1), DebtorStatus::Paid),
            ],
        }
    }

    #[tokio::test]
    async fn stats_pair_current_and_previous_windows() {
        let service = DashboardService::new(Arc::new(july_store()));

        let stats = service
            .get_stats(Some(d(2026, 7, 1)), Some(d(2026, 7, 31)), d(2026, 7, 31))
            .await
            .unwrap();

        assert_eq!(stats.total_revenue, dec(1500));
        assert_eq!(stats.total_profit, dec(450));
        assert_eq!(stats.total_expenses, dec(500));
        assert_eq!(stats.products_sold, 8);
        assert_eq!(stats.active_debtors, 2);

        // Comparação: junho teve receita 1000, lucro 200, 2 unidades,
        // nenhuma despesa, e um único devedor com vencimento até 1/jul.
        assert_eq!(stats.revenue_change, 50.0);
        assert_eq!(stats.profit_change, 125.0);
        assert_eq!(stats.expenses_change, 100.0);
        assert_eq!(stats.products_sold_change, 300.0);
        assert_eq!(stats.debtors_change, 100.0);
    }

    #[tokio::test]
    async fn stats_without_data_are_all_zero() {
        let service = DashboardService::new(Arc::new(InMemoryStore::default()));

        let stats = service.get_stats(None, None, d(2026, 7, 15)).await.unwrap();

        assert_eq!(stats.total_revenue, dec(0));
        assert_eq!(stats.total_expenses, dec(0));
        assert_eq!(stats.total_profit, dec(0));
        assert_eq!(stats.products_sold, 0);
        assert_eq!(stats.active_debtors, 0);
        assert_eq!(stats.revenue_change, 0.0);
        assert_eq!(stats.debtors_change, 0.0);
    }

    #[tokio::test]
    async fn chart_combines_three_sources_over_window() {
        let service = DashboardService::new(Arc::new(july_store()));

        let points = service
            .get_chart_data(
                Some(d(2026, 7, 1)),
                Some(d(2026, 7, 31)),
                Granularity::Day,
                d(2026, 7, 31),
            )
            .await
            .unwrap();

        // Jul 5 (despesa), Jul 6 (compra), Jul 10 e Jul 12 (vendas).
        let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Jul 5", "Jul 6", "Jul 10", "Jul 12"]);
        assert_eq!(points[0].expenses, dec(200));
        assert_eq!(points[1].expenses, dec(300));
        assert_eq!(points[2].sales, dec(1500));
        // A venda pendente de 12/jul entra na série.
        assert_eq!(points[3].sales, dec(1000));
    }

    #[tokio::test]
    async fn chart_outside_window_is_empty() {
        let service = DashboardService::new(Arc::new(july_store()));

        let points = service
            .get_chart_data(
                Some(d(2025, 1, 1)),
                Some(d(2025, 1, 31)),
                Granularity::Day,
                d(2026, 7, 31),
            )
            .await
            .unwrap();

        assert!(points.is_empty());
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_error() {
        let service = DashboardService::new(Arc::new(FailingStore));

        let stats = service.get_stats(None, None, d(2026, 7, 15)).await;
        assert!(matches!(stats, Err(AppError::DatabaseError(_))));

        let chart = service
            .get_chart_data(None, None, Granularity::Day, d(2026, 7, 15))
            .await;
        assert!(matches!(chart, Err(AppError::DatabaseError(_))));
    }
}
