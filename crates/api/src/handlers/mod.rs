pub mod customer;
pub mod dashboard;
pub mod expense;
pub mod export;
pub mod tour;
pub mod validation;
