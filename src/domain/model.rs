use crate::utils::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of cities a customer can be registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum City {
    Chicago,
    Houston,
    NewYork,
    LosAngeles,
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::Houston => "Houston",
            City::NewYork => "New York",
            City::LosAngeles => "Los Angeles",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace([' ', '_'], "-").as_str() {
            "chicago" => Ok(City::Chicago),
            "houston" => Ok(City::Houston),
            "new-york" => Ok(City::NewYork),
            "los-angeles" => Ok(City::LosAngeles),
            _ => Err(LedgerError::UnknownCity {
                value: s.to_string(),
            }),
        }
    }
}

/// Customer record with mutation gated by the active flag.
///
/// While the flag is false every setter except `set_balance` is a silent
/// no-op. The flag itself is a one-way latch: `set_active` only applies
/// while the customer is still active, so a deactivated customer can never
/// be reactivated through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: u32,
    active: bool,
    name: String,
    balance: f64,
    city: City,
    state: String,
}

impl Customer {
    pub const COUNTRY: &'static str = "India";

    pub fn new(
        id: u32,
        active: bool,
        name: impl Into<String>,
        balance: f64,
        city: City,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id,
            active,
            name: name.into(),
            balance,
            city,
            state: state.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &'static str {
        Self::COUNTRY
    }

    /// Applies only while the customer is still active.
    pub fn set_active(&mut self, value: bool) {
        if self.active {
            self.active = value;
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        if self.active {
            self.name = value.into();
        }
    }

    pub fn set_city(&mut self, value: City) {
        if self.active {
            self.city = value;
        }
    }

    // State is only adjustable from inside the crate, same guard as the rest.
    pub(crate) fn set_state(&mut self, value: impl Into<String>) {
        if self.active {
            self.state = value.into();
        }
    }

    /// Balance is not gated by the active flag.
    pub fn set_balance(&mut self, value: f64) {
        self.balance = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inactive_customer() -> Customer {
        Customer::new(101, false, "John Doe", 5000.00, City::Chicago, "Telangana")
    }

    #[test]
    fn test_setters_dropped_while_inactive() {
        let mut cus = inactive_customer();

        cus.set_name("Dhanush");
        cus.set_city(City::Houston);
        cus.set_state("Karnataka");

        assert_eq!(cus.name(), "John Doe");
        assert_eq!(cus.city(), City::Chicago);
        assert_eq!(cus.state(), "Telangana");
    }

    #[test]
    fn test_setters_apply_while_active() {
        let mut cus = Customer::new(7, true, "Jane", 0.0, City::NewYork, "Telangana");

        cus.set_name("Dhanush");
        cus.set_city(City::Houston);
        cus.set_state("Karnataka");

        assert_eq!(cus.name(), "Dhanush");
        assert_eq!(cus.city(), City::Houston);
        assert_eq!(cus.state(), "Karnataka");
    }

    #[test]
    fn test_active_flag_is_one_way_latch() {
        let mut cus = Customer::new(1, true, "Jane", 0.0, City::Chicago, "Telangana");

        cus.set_active(false);
        assert!(!cus.is_active());

        // Once false the setter no longer applies.
        cus.set_active(true);
        assert!(!cus.is_active());

        let mut never_active = inactive_customer();
        never_active.set_active(true);
        assert!(!never_active.is_active());
    }

    #[test]
    fn test_balance_always_mutable() {
        let mut cus = inactive_customer();
        cus.set_balance(123.45);
        assert_eq!(cus.balance(), 123.45);

        cus.set_active(true); // no-op, customer stays inactive
        cus.set_balance(-10.0);
        assert_eq!(cus.balance(), -10.0);
    }

    #[test]
    fn test_id_and_country_never_change() {
        let mut cus = Customer::new(101, true, "Jane", 0.0, City::Chicago, "Telangana");
        assert_eq!(cus.id(), 101);
        assert_eq!(cus.country(), "India");

        cus.set_name("Dhanush");
        cus.set_active(false);
        cus.set_balance(9.99);

        assert_eq!(cus.id(), 101);
        assert_eq!(cus.country(), "India");
    }

    #[test]
    fn test_city_parses_case_insensitively() {
        assert_eq!("chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("New York".parse::<City>().unwrap(), City::NewYork);
        assert_eq!("LOS_ANGELES".parse::<City>().unwrap(), City::LosAngeles);
        assert!("atlantis".parse::<City>().is_err());
    }
}
