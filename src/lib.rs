//! Pricing engine for voluntary workplace benefits
//!
//! This crate computes what an employee pays per billing period for voluntary
//! life, long-term disability and commuter benefits after the employer
//! contribution. Pricing is a set of pure functions over product, employee and
//! election records; see [`pricing::calculate_product_price`].

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod models;
pub mod pricing;
