//! Consumption tax calculation.
//!
//! This module turns the price a user typed into the amount they pay once
//! consumption tax is added.

pub mod common;
pub mod consumption_tax;

pub use consumption_tax::{calculate, compute, compute_tax_inclusive, parse_amount};
