use log_category_filter::filter::CategoryFilter;
use proptest::prelude::*;

fn pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-C\\\\]{0,4}",
        "[A-C\\\\]{0,4}".prop_map(|p| format!("{}*", p)),
    ]
}

fn category() -> impl Strategy<Value = String> {
    "[A-C\\\\*]{0,6}"
}

proptest! {
    #[test]
    fn getters_return_what_was_set(
        include in prop::collection::vec(pattern(), 0..6),
        exclude in prop::collection::vec(pattern(), 0..6),
    ) {
        let mut filter = CategoryFilter::new();
        filter.set_included(include.clone());
        filter.set_excluded(exclude.clone());
        prop_assert_eq!(filter.included(), include.as_slice());
        prop_assert_eq!(filter.excluded(), exclude.as_slice());
    }

    #[test]
    fn is_excluded_is_stable(
        include in prop::collection::vec(pattern(), 0..6),
        exclude in prop::collection::vec(pattern(), 0..6),
        category in category(),
    ) {
        let filter = CategoryFilter::new().with_included(include).with_excluded(exclude);
        let first = filter.is_excluded(&category);
        prop_assert_eq!(first, filter.is_excluded(&category));
        prop_assert_eq!(first, filter.decide(&category).is_excluded());
    }

    #[test]
    fn pattern_order_does_not_matter(
        include in prop::collection::vec(pattern(), 0..6),
        exclude in prop::collection::vec(pattern(), 0..6),
        category in category(),
    ) {
        let forward = CategoryFilter::new()
            .with_included(include.clone())
            .with_excluded(exclude.clone());
        let reversed = CategoryFilter::new()
            .with_included(include.into_iter().rev())
            .with_excluded(exclude.into_iter().rev());
        prop_assert_eq!(forward.is_excluded(&category), reversed.is_excluded(&category));
    }

    #[test]
    fn exclude_always_wins(
        include in prop::collection::vec(pattern(), 0..6),
        category in category(),
    ) {
        let filter = CategoryFilter::new()
            .with_included(include)
            .with_excluded([category.clone()]);
        prop_assert!(filter.is_excluded(&category));
    }
}
