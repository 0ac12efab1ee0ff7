pub mod toml_profile;

use crate::domain::model::City;
use crate::domain::ports::ProfileProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_number, validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "customer-ledger"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Builds a sample customer and demonstrates its guarded setters")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "101"))]
    pub customer_id: u32,

    /// The sample customer starts inactive unless this flag is set.
    #[cfg_attr(feature = "cli", arg(long))]
    pub active: bool,

    #[cfg_attr(feature = "cli", arg(long, default_value = "John Doe"))]
    pub name: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "5000.00"))]
    pub balance: f64,

    #[cfg_attr(feature = "cli", arg(long, default_value = "chicago"))]
    pub city: City,

    #[cfg_attr(feature = "cli", arg(long, default_value = "Telangana"))]
    pub state: String,

    /// TOML profile file; overrides the individual customer flags.
    #[cfg_attr(feature = "cli", arg(long))]
    pub profile: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ProfileProvider for CliConfig {
    fn customer_id(&self) -> u32 {
        self.customer_id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn city(&self) -> City {
        self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("state", &self.state)?;
        validate_finite_number("balance", self.balance)?;
        Ok(())
    }
}
