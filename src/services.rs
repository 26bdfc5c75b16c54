pub mod product_service;
pub use product_service::ProductService;
pub mod sales_service;
pub use sales_service::SalesService;
pub mod debtor_service;
pub use debtor_service::DebtorService;
pub mod expense_service;
pub use expense_service::ExpenseService;
pub mod note_service;
pub use note_service::NoteService;
pub mod dashboard_service;
pub use dashboard_service::{DashboardService, DashboardStore};
