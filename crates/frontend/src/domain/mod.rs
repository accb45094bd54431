pub mod customers;
pub mod orders;
pub mod quotes;
pub mod suppliers;
