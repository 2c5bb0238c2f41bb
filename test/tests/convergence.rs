use proptest::prelude::*;

use framesync_shared::{Filter, Role};
use framesync_test::{exchange, TestPair};

fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        Just(Filter::Only(Role::Developer)),
        Just(Filter::Only(Role::Manager)),
        Just(Filter::Only(Role::Designer)),
    ]
}

proptest! {
    #[test]
    fn embedded_converges_to_last_host_filter(
        before_load in filter_strategy(),
        selections in prop::collection::vec(filter_strategy(), 0..16),
    ) {
        let mut pair = TestPair::new();
        pair.host.select_filter(before_load);
        pair.mount_and_load();
        for filter in &selections {
            pair.host.select_filter(*filter);
        }
        exchange(&mut pair);

        let expected = selections.last().copied().unwrap_or(before_load);
        prop_assert_eq!(pair.embedded().filter(), expected);
        prop_assert_eq!(pair.host.sent_count(), selections.len() + 1);
    }

    #[test]
    fn host_keeps_last_text_from_embedded(texts in prop::collection::vec(".{0,24}", 1..8)) {
        let mut pair = TestPair::new();
        pair.mount_and_load();
        for text in &texts {
            pair.embedded_mut().set_text(text.clone());
        }
        exchange(&mut pair);

        prop_assert_eq!(pair.host.remote_text(), texts[texts.len() - 1].as_str());
    }
}
