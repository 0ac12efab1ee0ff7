use crate::core::ProfileProvider;
use crate::domain::model::City;

/// Runs the demonstration sequence: build the customer from a profile,
/// report its fields, attempt the sample mutations, report again.
///
/// The mutation attempts only land while the customer is active; with the
/// default (inactive) profile every line after "Modified values" shows the
/// original data. The report is returned as lines so callers decide where
/// it goes.
pub struct Showcase<P: ProfileProvider> {
    profile: P,
}

impl<P: ProfileProvider> Showcase<P> {
    pub fn new(profile: P) -> Self {
        Self { profile }
    }

    pub fn run(&self) -> Vec<String> {
        let mut customer = self.profile.build_customer();
        tracing::debug!("Built customer {} from profile", customer.id());

        let mut lines = vec![
            format!("Customer ID: {}", customer.id()),
            format!("Customer Name: {}", customer.name()),
            format!("Customer Status: {}", customer.is_active()),
            format!("Customer Balance: {}", customer.balance()),
            format!("Customer City: {}", customer.city()),
            String::new(),
            "Modified values".to_string(),
        ];

        customer.set_name("Dhanush");
        lines.push(format!("Customer Name: {}", customer.name()));

        customer.set_city(City::Houston);
        // Crate-internal state setter, dropped under the same guard.
        customer.set_state("Karnataka");
        lines.push(format!("Modified City: {}", customer.city()));
        lines.push(format!("Customer State: {}", customer.state()));

        lines.push(format!("Customer Country: {}", customer.country()));

        tracing::debug!(
            "Mutation attempts {} (customer {})",
            if customer.is_active() {
                "applied"
            } else {
                "dropped"
            },
            customer.id()
        );

        lines
    }
}
