//! # Eligibility Resolver
//!
//! Computes the set of post-delivery actions a customer may choose from,
//! as a pure function of the item's product category and the shipment's
//! city. Deterministic, no side effects, safe to call repeatedly.
//!
//! ## Rules
//!
//! 1. Return is always offered once delivered.
//! 2. Exchange (simultaneous pickup and delivery) is offered only when the
//!    city resolves to a serviced metro region AND the category is not in
//!    the exclusion set.
//! 3. Replacement (pickup first, reship after) is offered exactly when
//!    exchange is not; they are mutually exclusive substitutes.
//!
//! The exclusion set is policy data, not resolver logic: adding a category
//! to it requires no code change here.

use std::collections::BTreeSet;

use postship_core::{City, ProductCategory};
use postship_state::ActionKind;

/// Policy inputs for eligibility resolution.
///
/// The metro-region table lives in `postship_core::city`; this carries the
/// category exclusion set. The default policy excludes pillows from
/// exchange (they are reshipped, not swapped on the doorstep).
#[derive(Debug, Clone)]
pub struct EligibilityPolicy {
    /// Categories never offered the exchange flow.
    pub exchange_excluded: BTreeSet<ProductCategory>,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            exchange_excluded: BTreeSet::from([ProductCategory::Pillow]),
        }
    }
}

impl EligibilityPolicy {
    /// A policy with no excluded categories (every metro item may exchange).
    pub fn without_exclusions() -> Self {
        Self {
            exchange_excluded: BTreeSet::new(),
        }
    }

    /// Whether the exchange flow is offered for this category and city.
    pub fn exchange_offered(&self, category: ProductCategory, city: &City) -> bool {
        city.is_metro() && !self.exchange_excluded.contains(&category)
    }

    /// The ordered action set offered for this category and city.
    ///
    /// Always contains `Return`; then exactly one of `Replacement` or
    /// `Exchange` per the rules above.
    pub fn available_actions(&self, category: ProductCategory, city: &City) -> Vec<ActionKind> {
        let mut actions = vec![ActionKind::Return];
        if self.exchange_offered(category, city) {
            actions.push(ActionKind::Exchange);
        } else {
            actions.push(ActionKind::Replacement);
        }
        actions
    }

    /// Whether a specific action kind is offered for this category and city.
    pub fn is_offered(&self, kind: ActionKind, category: ProductCategory, city: &City) -> bool {
        self.available_actions(category, city).contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metro_non_excluded_gets_exchange() {
        let policy = EligibilityPolicy::default();
        let actions = policy.available_actions(ProductCategory::Mattress, &City::new("Mumbai"));
        assert_eq!(actions, vec![ActionKind::Return, ActionKind::Exchange]);
    }

    #[test]
    fn test_metro_pillow_gets_replacement() {
        let policy = EligibilityPolicy::default();
        let actions = policy.available_actions(ProductCategory::Pillow, &City::new("Delhi NCR"));
        assert_eq!(actions, vec![ActionKind::Return, ActionKind::Replacement]);
    }

    #[test]
    fn test_non_metro_gets_replacement_regardless_of_category() {
        let policy = EligibilityPolicy::default();
        for category in ProductCategory::ALL {
            let actions = policy.available_actions(*category, &City::new("Jaipur"));
            assert_eq!(actions, vec![ActionKind::Return, ActionKind::Replacement]);
        }
    }

    #[test]
    fn test_exclusion_set_is_policy_data() {
        let policy = EligibilityPolicy::without_exclusions();
        let actions = policy.available_actions(ProductCategory::Pillow, &City::new("Delhi"));
        assert_eq!(actions, vec![ActionKind::Return, ActionKind::Exchange]);

        let widened = EligibilityPolicy {
            exchange_excluded: BTreeSet::from([ProductCategory::Pillow, ProductCategory::Bedding]),
        };
        assert!(!widened.exchange_offered(ProductCategory::Bedding, &City::new("Delhi")));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let policy = EligibilityPolicy::default();
        let city = City::new("Bengaluru");
        let first = policy.available_actions(ProductCategory::Chair, &city);
        let second = policy.available_actions(ProductCategory::Chair, &city);
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy over all product categories.
    fn any_category() -> impl Strategy<Value = ProductCategory> {
        proptest::sample::select(ProductCategory::ALL.to_vec())
    }

    /// Strategy over arbitrary free-text city strings.
    fn any_city() -> impl Strategy<Value = City> {
        "[a-zA-Z ]{0,24}".prop_map(City::new)
    }

    proptest! {
        /// Return is offered for every (category, city) pair.
        #[test]
        fn return_is_always_offered(category in any_category(), city in any_city()) {
            let policy = EligibilityPolicy::default();
            prop_assert!(policy.available_actions(category, &city).contains(&ActionKind::Return));
        }

        /// Exchange and replacement are mutually exclusive substitutes.
        #[test]
        fn exchange_and_replacement_are_exclusive(category in any_category(), city in any_city()) {
            let policy = EligibilityPolicy::default();
            let actions = policy.available_actions(category, &city);
            let has_exchange = actions.contains(&ActionKind::Exchange);
            let has_replacement = actions.contains(&ActionKind::Replacement);
            prop_assert!(has_exchange != has_replacement);
        }

        /// Pillows never see the exchange flow, metro or not.
        #[test]
        fn pillows_are_never_exchanged(city in any_city()) {
            let policy = EligibilityPolicy::default();
            let actions = policy.available_actions(ProductCategory::Pillow, &city);
            prop_assert!(!actions.contains(&ActionKind::Exchange));
            prop_assert!(actions.contains(&ActionKind::Replacement));
        }

        /// Non-metro cities never see the exchange flow for any category.
        #[test]
        fn non_metro_never_exchanges(category in any_category()) {
            let policy = EligibilityPolicy::default();
            let city = City::new("Indore");
            prop_assert!(!policy.exchange_offered(category, &city));
        }
    }
}
