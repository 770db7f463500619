//! Check-item key to display label lookup
//!
//! Stored checklist rows only carry a key. Labels come from the built-in
//! collection and delivery tables, optionally overridden per deployment.
//! Unknown keys render as the raw key.

use std::collections::HashMap;

/// Resolves a stored check-item key to the label printed in the report
pub trait CheckItemLabels {
    fn resolve(&self, key: &str) -> String;
}

/// Items inspected on every handover
pub const CHECK_ITEMS: &[(&str, &str)] = &[
    ("bodywork", "Bodywork free from new damage"),
    ("wheels_alloys", "Wheels and alloys condition"),
    ("windscreen_glass", "Windscreen and glass intact"),
    ("lights", "All exterior lights working"),
    ("mirrors", "Mirrors present and undamaged"),
    ("wipers", "Wipers and washers working"),
    ("interior_clean", "Interior clean and tidy"),
    ("seats_upholstery", "Seats and upholstery condition"),
    ("dashboard_warnings", "No dashboard warning lights"),
    ("fuel_level", "Fuel / charge level recorded"),
    ("spare_wheel", "Spare wheel or repair kit present"),
    ("locking_wheel_nut", "Locking wheel nut present"),
    ("service_book", "Service book present"),
    ("keys", "Number of keys confirmed"),
    ("oil_level", "Engine oil level checked"),
];

/// Extra items completed when a vehicle is delivered to a customer
pub const DELIVERY_CHECK_ITEMS: &[(&str, &str)] = &[
    ("v5_present", "V5 document handed over"),
    ("handbook", "Owner's handbook provided"),
    ("features_demo", "Vehicle features demonstrated"),
    ("customer_id_checked", "Customer identification checked"),
    ("payment_confirmed", "Payment confirmed"),
];

/// Built-in labels plus per-deployment overrides
#[derive(Debug, Clone, Default)]
pub struct CheckItemLabelTable {
    overrides: HashMap<String, String>,
}

impl CheckItemLabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    fn builtin(key: &str) -> Option<&'static str> {
        CHECK_ITEMS
            .iter()
            .chain(DELIVERY_CHECK_ITEMS.iter())
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
    }
}

impl CheckItemLabels for CheckItemLabelTable {
    fn resolve(&self, key: &str) -> String {
        if let Some(label) = self.overrides.get(key) {
            return label.clone();
        }
        Self::builtin(key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}

impl CheckItemLabels for HashMap<String, String> {
    fn resolve(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_and_fallback() {
        let labels = CheckItemLabelTable::new();
        assert_eq!(labels.resolve("lights"), "All exterior lights working");
        assert_eq!(labels.resolve("v5_present"), "V5 document handed over");
        assert_eq!(labels.resolve("mystery_item"), "mystery_item");
    }

    #[test]
    fn test_override_wins() {
        let mut overrides = HashMap::new();
        overrides.insert("lights".to_string(), "Lamps".to_string());
        let labels = CheckItemLabelTable::with_overrides(overrides);
        assert_eq!(labels.resolve("lights"), "Lamps");
        assert_eq!(labels.resolve("wipers"), "Wipers and washers working");
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = CHECK_ITEMS
            .iter()
            .chain(DELIVERY_CHECK_ITEMS.iter())
            .map(|(k, _)| *k)
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
