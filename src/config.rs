// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, sync::Arc, time::Duration};

use crate::{
    db::{
        DashboardRepository, DebtorRepository, ExpenseRepository, NoteRepository,
        ProductRepository, SaleRepository,
    },
    services::{
        DashboardService, DebtorService, ExpenseService, NoteService, ProductService,
        SalesService,
    },
};

// O estado compartilhado, acessível em toda a aplicação.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub product_service: ProductService,
    pub sales_service: SalesService,
    pub debtor_service: DebtorService,
    pub expense_service: ExpenseService,
    pub note_service: NoteService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let product_repo = ProductRepository::new(db_pool.clone());
        let sale_repo = SaleRepository::new(db_pool.clone());
        let debtor_repo = DebtorRepository::new(db_pool.clone());
        let expense_repo = ExpenseRepository::new(db_pool.clone());
        let note_repo = NoteRepository::new(db_pool.clone());

        let product_service = ProductService::new(product_repo.clone());
        let sales_service = SalesService::new(
            db_pool.clone(),
            sale_repo,
            product_repo,
            debtor_repo.clone(),
        );
        let debtor_service = DebtorService::new(db_pool.clone(), debtor_repo);
        let expense_service = ExpenseService::new(expense_repo);
        let note_service = NoteService::new(note_repo);
        let dashboard_service =
            DashboardService::new(Arc::new(DashboardRepository::new(db_pool.clone())));

        Ok(Self {
            db_pool,
            product_service,
            sales_service,
            debtor_service,
            expense_service,
            note_service,
            dashboard_service,
        })
    }
}
