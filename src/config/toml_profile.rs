use crate::domain::model::City;
use crate::domain::ports::ProfileProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_number, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Customer profile loaded from a TOML file:
///
/// ```toml
/// [customer]
/// id = 101
/// active = false
/// name = "John Doe"
/// balance = 5000.00
/// city = "chicago"
/// state = "Telangana"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlProfile {
    pub customer: CustomerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSection {
    pub id: u32,
    pub active: bool,
    pub name: String,
    pub balance: f64,
    pub city: City,
    pub state: String,
}

impl TomlProfile {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str_content(&content)
    }

    pub fn from_str_content(content: &str) -> Result<Self> {
        let profile: TomlProfile = toml::from_str(content)?;
        Ok(profile)
    }
}

impl ProfileProvider for TomlProfile {
    fn customer_id(&self) -> u32 {
        self.customer.id
    }

    fn active(&self) -> bool {
        self.customer.active
    }

    fn name(&self) -> &str {
        &self.customer.name
    }

    fn balance(&self) -> f64 {
        self.customer.balance
    }

    fn city(&self) -> City {
        self.customer.city
    }

    fn state(&self) -> &str {
        &self.customer.state
    }
}

impl Validate for TomlProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("customer.name", &self.customer.name)?;
        validate_non_empty_string("customer.state", &self.customer.state)?;
        validate_finite_number("customer.balance", self.customer.balance)?;
        Ok(())
    }
}
