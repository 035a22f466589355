//! Dutch income tax, VAT and deduction calculations for sole proprietors.
//!
//! Each module covers one rule and exposes plain functions over a
//! [`RateTable`](crate::RateTable). [`TaxCalculator`] strings them together
//! into the full yearly calculation.

pub mod bijtelling;
pub mod calculator;
pub mod common;
pub mod income_tax;
pub mod kia;
pub mod kor;
pub mod ondernemersaftrek;
pub mod representation;
pub mod transaction_summary;
pub mod vat;

pub use bijtelling::car_bijtelling;
pub use calculator::TaxCalculator;
pub use income_tax::income_tax;
pub use kia::kia;
pub use kor::check_kor_status;
pub use ondernemersaftrek::{
    Ondernemersaftrek, is_eligible_for_startersaftrek, meets_hours_criterion,
};
pub use representation::representation_deduction;
pub use vat::{net_vat_position, vat_from_gross};
