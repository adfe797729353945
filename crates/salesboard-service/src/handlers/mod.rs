//! HTTP request handlers.

pub mod health;
pub mod reports;
pub mod sales;
