//src/main.rs

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let product_routes = Router::new()
        .route("/"
               ,get(handlers::products::list_products)
               .post(handlers::products::create_product)
        );

    let sales_routes = Router::new()
        .route("/"
               ,get(handlers::sales::list_sales)
               .post(handlers::sales::create_sale)
        )
        .route("/recent", get(handlers::sales::recent_sales))
        .route("/{id}/status", patch(handlers::sales::update_sale_status));

    let debtor_routes = Router::new()
        .route("/"
               ,get(handlers::debtors::list_debtors)
               .post(handlers::debtors::create_debtor)
        )
        .route("/recent", get(handlers::debtors::recent_debtors))
        .route("/{id}/pay", post(handlers::debtors::pay_debtor));

    let expense_routes = Router::new()
        .route("/"
               ,get(handlers::expenses::list_expenses)
               .post(handlers::expenses::create_expense)
        );

    let note_routes = Router::new()
        .route("/"
               ,get(handlers::notes::list_notes)
               .post(handlers::notes::create_note)
        )
        .route("/{id}", delete(handlers::notes::delete_note));

    let dashboard_routes = Router::new()
        .route("/stats", get(handlers::dashboard::get_stats))
        .route("/chart", get(handlers::dashboard::get_chart));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/products", product_routes)
        .nest("/api/sales", sales_routes)
        .nest("/api/debtors", debtor_routes)
        .nest("/api/expenses", expense_routes)
        .nest("/api/notes", note_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
