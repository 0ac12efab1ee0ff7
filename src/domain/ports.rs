use crate::domain::model::{City, Customer};

/// Source of the sample customer fields. Implemented by every config
/// backend (CLI flags, TOML profile).
pub trait ProfileProvider: Send + Sync {
    fn customer_id(&self) -> u32;
    fn active(&self) -> bool;
    fn name(&self) -> &str;
    fn balance(&self) -> f64;
    fn city(&self) -> City;
    fn state(&self) -> &str;

    fn build_customer(&self) -> Customer {
        Customer::new(
            self.customer_id(),
            self.active(),
            self.name(),
            self.balance(),
            self.city(),
            self.state(),
        )
    }
}
