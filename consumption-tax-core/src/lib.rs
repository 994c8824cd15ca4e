//! Consumption tax computation for a single-screen price form.
//!
//! The crate turns the text a user typed and a selected rate (8% or 10%)
//! into a tax-inclusive amount, floored to a whole currency unit and
//! rendered with comma grouping. The [`state`] module holds the form state
//! and the reducer that drives it.

pub mod calculations;
pub mod models;
pub mod state;
pub mod utils;

pub use calculations::{calculate, compute, compute_tax_inclusive, parse_amount};
pub use models::*;
pub use state::{FormEvent, FormState, ResultVisibility, reduce};
pub use utils::format_with_grouping;
