/// Both parties may write the same field before seeing each other's
/// message. Each applies whatever arrives last.
use framesync_embedded::EmbeddedVariant;
use framesync_shared::{Filter, Role};
use framesync_test::{exchange, init_logger, TestPair};

#[test]
fn crossing_filter_updates_swap() {
    init_logger();
    let mut pair = TestPair::new();
    pair.mount_and_load();
    exchange(&mut pair);

    pair.host.select_filter(Filter::Only(Role::Manager));
    pair.embedded_mut().select_filter(Filter::Only(Role::Designer));
    exchange(&mut pair);

    // each side ends up with the other's choice
    assert_eq!(pair.host.filter(), Filter::Only(Role::Designer));
    assert_eq!(pair.embedded().filter(), Filter::Only(Role::Manager));
}

#[test]
fn latest_update_wins_within_a_round() {
    init_logger();
    let mut pair = TestPair::new();
    pair.mount_and_load();
    exchange(&mut pair);

    pair.host.select_filter(Filter::Only(Role::Manager));
    pair.host.select_filter(Filter::Only(Role::Developer));
    exchange(&mut pair);

    assert_eq!(pair.embedded().filter(), Filter::Only(Role::Developer));
}

#[test]
fn minimal_variant_only_syncs_filter() {
    init_logger();
    let mut pair = TestPair::with_variant(EmbeddedVariant::Minimal);
    pair.host.select_filter(Filter::Only(Role::Designer));
    pair.mount_and_load();
    exchange(&mut pair);
    assert_eq!(pair.embedded().filter(), Filter::Only(Role::Designer));

    pair.host.set_text("ignored");
    pair.embedded_mut().set_text("kept local");
    exchange(&mut pair);

    assert_eq!(pair.embedded().remote_text(), "");
    assert_eq!(pair.host.remote_text(), "");
    assert_eq!(pair.embedded().local_input_text(), "kept local");
    assert_eq!(pair.embedded().sent_count(), 0);
}
