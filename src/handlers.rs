pub mod products;
pub mod sales;
pub mod debtors;
pub mod expenses;
pub mod notes;
pub mod dashboard;
