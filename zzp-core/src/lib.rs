//! Income tax, VAT and deduction rules for Dutch sole proprietors.
//!
//! Every calculation is a pure function of its inputs and a [`RateTable`].

pub mod calculations;
pub mod models;

pub use calculations::TaxCalculator;
pub use models::*;
