//! Property tests for the dependency-list invariants

use class_factory::{new_class, TemplateRegistry};
use proptest::prelude::*;

fn dep_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}"
}

proptest! {
    #[test]
    fn prop_iteration_preserves_first_seen_order(
        names in proptest::collection::vec(dep_name(), 0..20)
    ) {
        let registry = TemplateRegistry::new();
        let class = new_class(names.clone());

        let mut expected: Vec<String> = Vec::new();
        for name in &names {
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }

        let terminals: Vec<&str> = class.terminals(&registry).collect();
        prop_assert_eq!(terminals, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_repeated_name_appears_once(name in dep_name()) {
        let registry = TemplateRegistry::new();
        let class = new_class([name.clone(), name.clone()]);

        prop_assert_eq!(class.count(&registry), 1);
    }

    #[test]
    fn prop_add_dependency_is_idempotent(
        names in proptest::collection::vec(dep_name(), 1..10)
    ) {
        let once = new_class(names.clone());
        let mut twice = new_class(names.clone());
        twice.add_dependency(names);

        prop_assert_eq!(once, twice);
    }
}
