mod amount;
mod display_state;
mod tax_rate;
mod validation_error;

pub use amount::{Amount, TaxInclusiveAmount};
pub use display_state::{DisplayState, ErrorMessage};
pub use tax_rate::{ParseTaxRateError, TaxRate};
pub use validation_error::ValidationError;
