// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Products ---
        handlers::products::list_products,
        handlers::products::create_product,

        // --- Sales ---
        handlers::sales::list_sales,
        handlers::sales::recent_sales,
        handlers::sales::create_sale,
        handlers::sales::update_sale_status,

        // --- Debtors ---
        handlers::debtors::list_debtors,
        handlers::debtors::recent_debtors,
        handlers::debtors::create_debtor,
        handlers::debtors::pay_debtor,

        // --- Expenses ---
        handlers::expenses::list_expenses,
        handlers::expenses::create_expense,

        // --- Notes ---
        handlers::notes::list_notes,
        handlers::notes::create_note,
        handlers::notes::delete_note,

        // --- Dashboard ---
        handlers::dashboard::get_stats,
        handlers::dashboard::get_chart,
    ),
    components(
        schemas(
            models::product::Product,
            models::product::CreateProductRequest,
            models::sale::Sale,
            models::sale::PaymentStatus,
            models::sale::CreateSaleRequest,
            models::sale::UpdateSaleStatusRequest,
            models::debtor::Debtor,
            models::debtor::DebtorStatus,
            models::debtor::Payment,
            models::debtor::CreateDebtorRequest,
            models::expense::Expense,
            models::expense::CreateExpenseRequest,
            models::note::Note,
            models::note::NotePriority,
            models::note::CreateNoteRequest,
            models::dashboard::DashboardStats,
            models::dashboard::ChartPoint,
            models::dashboard::Granularity,
        )
    ),
    tags(
        (name = "Products", description = "Estoque e compras de produtos"),
        (name = "Sales", description = "Registro e acompanhamento de vendas"),
        (name = "Debtors", description = "Controle de devedores"),
        (name = "Expenses", description = "Despesas operacionais"),
        (name = "Notes", description = "Notas internas"),
        (name = "Dashboard", description = "Estatísticas e gráficos do painel"),
    ),
    info(
        title = "Sales Dashboard API",
        description = "API do painel administrativo: estoque, vendas, devedores, despesas e estatísticas derivadas.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
