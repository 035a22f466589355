//! Business profile stored as TOML.
//!
//! The profile holds the facts about a business that rarely change between
//! calculations: the tax year, hours worked, starting year, deduction history
//! and the business car. Figures that change per calculation (profit, VAT,
//! investments) are passed on the command line.
//!
//! ```toml
//! tax_year = 2025
//! hours_worked = 1450
//! first_year_business = 2023
//! years_used_zelfstandigenaftrek = 1
//! representation_method = "percentage"
//!
//! [car]
//! catalog_value = 40000
//! is_electric = true
//! private_kilometers = 600
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use zzp_core::calculations::is_eligible_for_startersaftrek;
use zzp_core::{CarParameters, RateTable, RepresentationMethod};

/// Tax year used when a profile does not name one.
pub const DEFAULT_TAX_YEAR: i32 = 2025;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read profile '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("no rate table for tax year {0}")]
    UnsupportedTaxYear(i32),
}

fn default_tax_year() -> i32 {
    DEFAULT_TAX_YEAR
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessProfile {
    #[serde(default = "default_tax_year")]
    pub tax_year: i32,

    #[serde(default)]
    pub hours_worked: i64,

    /// First calendar year of the business. Without it the business is
    /// never treated as a starter.
    pub first_year_business: Option<i32>,

    /// How many earlier years zelfstandigenaftrek was claimed.
    #[serde(default)]
    pub years_used_zelfstandigenaftrek: i32,

    #[serde(default)]
    pub representation_method: RepresentationMethod,

    pub car: Option<CarParameters>,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            tax_year: DEFAULT_TAX_YEAR,
            hours_worked: 0,
            first_year_business: None,
            years_used_zelfstandigenaftrek: 0,
            representation_method: RepresentationMethod::Percentage,
            car: None,
        }
    }
}

impl BusinessProfile {
    pub fn from_toml_str(input: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), tax_year = profile.tax_year, "loaded business profile");
        Ok(profile)
    }

    /// The rate table for the profile's tax year.
    pub fn rates(&self) -> Result<&'static RateTable, ProfileError> {
        RateTable::for_year(self.tax_year).ok_or(ProfileError::UnsupportedTaxYear(self.tax_year))
    }

    /// Whether startersaftrek applies in the profile's tax year.
    pub fn is_starter_eligible(
        &self,
        rates: &RateTable,
    ) -> bool {
        self.first_year_business.is_some_and(|first_year| {
            is_eligible_for_startersaftrek(
                rates,
                rates.tax_year,
                first_year,
                self.years_used_zelfstandigenaftrek,
            )
        })
    }
}
