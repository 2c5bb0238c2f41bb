/// Inbound messages from any origin other than the configured one are
/// dropped before decoding and never change state.
use framesync_host::RejectedEvent;
use framesync_shared::{encode, Envelope, Filter, InboundError, MessageData, Role};
use framesync_test::{exchange, init_logger, LocalWindow, TestPair, CHILD_ORIGIN};

const EVIL_ORIGIN: &str = "https://evil.example";

#[test]
fn host_ignores_untrusted_origin() {
    init_logger();
    let mut pair = TestPair::new();
    let before = pair.host.state().clone();

    pair.windows.host.deliver_from(
        EVIL_ORIGIN,
        MessageData::Text(encode(&Envelope::filter_update(Role::Designer))),
    );
    pair.windows.host.deliver_from(
        EVIL_ORIGIN,
        MessageData::Text(encode(&Envelope::text_update("injected"))),
    );

    let mut events = exchange(&mut pair).host;
    assert_eq!(pair.host.state(), &before);

    let rejected: Vec<InboundError> = events.read::<RejectedEvent>().collect();
    assert_eq!(rejected.len(), 2);
    assert!(rejected
        .iter()
        .all(|error| matches!(error, InboundError::UntrustedOrigin { .. })));
}

#[test]
fn embedded_ignores_messages_not_from_parent_origin() {
    init_logger();
    let mut pair = TestPair::new();
    pair.mount_and_load();
    exchange(&mut pair);

    // a sibling frame on the child's own origin is still not the parent
    pair.windows.embedded.deliver_from(
        CHILD_ORIGIN,
        MessageData::Text(encode(&Envelope::text_update("sibling"))),
    );
    exchange(&mut pair);

    assert_eq!(pair.embedded().remote_text(), "");
}

#[test]
fn trusted_but_malformed_messages_change_nothing() {
    init_logger();
    let mut pair = TestPair::new();
    pair.host.select_filter(Filter::Only(Role::Manager));
    let before = pair.host.state().clone();

    for data in ["not json", "{}", r#"{"type":"object","payload":{"filter":"ceo"}}"#] {
        pair.windows
            .host
            .deliver_from(CHILD_ORIGIN, MessageData::Text(data.to_string()));
    }
    pair.windows.host.deliver_from(
        CHILD_ORIGIN,
        MessageData::NonText {
            kind: "object".to_string(),
        },
    );

    let mut events = exchange(&mut pair).host;
    assert_eq!(pair.host.state(), &before);
    assert_eq!(events.read::<RejectedEvent>().count(), 4);
}

#[test]
fn unknown_variant_is_dropped_silently() {
    init_logger();
    let mut pair = TestPair::new();
    pair.windows.host.deliver_from(
        CHILD_ORIGIN,
        MessageData::Text(r#"{"type":"resize","height":400}"#.to_string()),
    );

    let mut events = exchange(&mut pair).host;
    assert_eq!(pair.host.remote_text(), "");
    assert_eq!(pair.host.filter(), Filter::All);
    assert!(events.has::<RejectedEvent>());
}

#[test]
fn host_posts_are_scoped_to_child_origin() {
    init_logger();
    let mut pair = TestPair::new();
    pair.mount_and_load();

    // the document inside the frame navigated somewhere else
    let navigated = LocalWindow::new("https://elsewhere.example", true);
    let frame = navigated.handle_from(&pair.windows.host);
    let _listener = navigated.listen();

    pair.unmount();
    pair.host.mount_frame(Box::new(frame));
    pair.host.frame_loaded();

    assert_eq!(navigated.received_count(), 0);
    assert_eq!(navigated.refused_count(), 1);
}
