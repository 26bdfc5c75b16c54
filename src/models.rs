pub mod product;
pub use product::{CreateProductRequest, Product};
pub mod sale;
pub use sale::{CreateSaleRequest, PaymentStatus, Sale, UpdateSaleStatusRequest};
pub mod debtor;
pub use debtor::{CreateDebtorRequest, Debtor, DebtorStatus, Payment};
pub mod expense;
pub use expense::{CreateExpenseRequest, Expense};
pub mod note;
pub use note::{CreateNoteRequest, Note, NotePriority};
pub mod dashboard;
pub use dashboard::{
    ChartPoint, ChartQuery, DashboardStats, DateRangeQuery, DateWindow, Granularity,
};
