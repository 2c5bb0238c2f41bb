use framesync_host::{RemoteTextEvent, NO_REMOTE_TEXT_PLACEHOLDER};
use framesync_shared::{Filter, Role};
use framesync_test::{exchange, init_logger, TestPair};

#[test]
fn text_flows_both_ways_without_touching_other_state() {
    init_logger();
    let mut pair = TestPair::new();
    pair.host.select_filter(Filter::Only(Role::Manager));
    pair.mount_and_load();
    exchange(&mut pair);

    pair.host.set_text("hello");
    let mut events = exchange(&mut pair).embedded.expect("embedded is loaded");
    assert_eq!(pair.embedded().remote_text(), "hello");
    assert_eq!(
        events.read::<RemoteTextEvent>().collect::<Vec<_>>(),
        vec!["hello".to_string()]
    );

    pair.embedded_mut().set_text("hi back");
    let mut events = exchange(&mut pair).host;
    assert_eq!(pair.host.remote_text(), "hi back");
    assert_eq!(pair.host.remote_text_display(), "hi back");
    assert!(events.has::<RemoteTextEvent>());

    assert_eq!(pair.host.filter(), Filter::Only(Role::Manager));
    assert_eq!(pair.host.local_input_text(), "hello");
    assert_eq!(pair.embedded().local_input_text(), "hi back");
    assert_eq!(pair.embedded().filter(), Filter::Only(Role::Manager));
}

#[test]
fn placeholder_until_child_speaks() {
    init_logger();
    let mut pair = TestPair::new();
    pair.mount_and_load();
    exchange(&mut pair);

    assert_eq!(pair.host.remote_text_display(), NO_REMOTE_TEXT_PLACEHOLDER);
}

#[test]
fn every_keystroke_is_sent() {
    init_logger();
    let mut pair = TestPair::new();
    pair.mount_and_load();
    exchange(&mut pair);

    for text in ["h", "he", "hel", "hell", "hello"] {
        pair.host.set_text(text);
    }
    let mut events = exchange(&mut pair).embedded.expect("embedded is loaded");

    assert_eq!(events.read::<RemoteTextEvent>().count(), 5);
    assert_eq!(pair.embedded().remote_text(), "hello");
}

#[test]
fn empty_text_is_synchronized() {
    init_logger();
    let mut pair = TestPair::new();
    pair.mount_and_load();
    pair.host.set_text("draft");
    pair.host.set_text("");
    exchange(&mut pair);

    assert_eq!(pair.embedded().remote_text(), "");
    assert_eq!(pair.host.sent_count(), 3);
}
