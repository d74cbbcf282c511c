//! Sundae
//!
//! Sundae is the promotion matching and pack pricing engine behind a small
//! retail point of sale. Given a presentation, a quantity, a sales channel
//! and a reference date, it picks at most one promotion and prices the line
//! with pack/remainder arithmetic.

pub mod catalog;
pub mod channels;
pub mod clock;
pub mod discounts;
pub mod engine;
pub mod prelude;
pub mod presentations;
pub mod pricing;
pub mod promotions;
pub mod receipt;
pub mod records;
pub mod sales;
