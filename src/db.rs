pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod sale_repo;
pub use sale_repo::SaleRepository;
pub mod debtor_repo;
pub use debtor_repo::DebtorRepository;
pub mod expense_repo;
pub use expense_repo::ExpenseRepository;
pub mod note_repo;
pub use note_repo::NoteRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
