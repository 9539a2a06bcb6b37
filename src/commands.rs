pub mod browse;
pub mod cart;
pub mod checkout;
pub mod details;
