use super::*;

#[test]
fn records_scroll_calls_in_order() {
    let mut vp = InMemoryViewport::new(800.0);
    vp.scroll_to(100.0, ScrollBehavior::Smooth);
    vp.scroll_to(50.0, ScrollBehavior::Instant);
    assert_eq!(vp.scroll_offset(), 50.0);
    assert_eq!(
        vp.calls(),
        &[
            ScrollCall {
                top: 100.0,
                behavior: ScrollBehavior::Smooth
            },
            ScrollCall {
                top: 50.0,
                behavior: ScrollBehavior::Instant
            },
        ]
    );
}

#[test]
fn offset_is_clamped_to_document() {
    let mut vp = InMemoryViewport::new(800.0).with_document_height(2000.0);
    vp.scroll_to(5000.0, ScrollBehavior::Instant);
    assert_eq!(vp.scroll_offset(), 1200.0);
    vp.set_offset(-10.0);
    assert_eq!(vp.scroll_offset(), 0.0);
}

#[test]
fn listeners_attach_and_detach() {
    let mut vp = InMemoryViewport::new(800.0);
    let a = vp.attach_scroll_listener();
    let b = vp.attach_scroll_listener();
    assert_ne!(a, b);
    vp.detach_scroll_listener(a);
    assert_eq!(vp.attached_listeners(), 1);
}

#[test]
fn cancel_requests_are_counted() {
    let mut vp = InMemoryViewport::new(800.0);
    vp.scroll_to(300.0, ScrollBehavior::Smooth);
    vp.cancel_scroll();
    assert_eq!(vp.cancelled_scrolls(), 1);
    assert_eq!(vp.scroll_offset(), 300.0);
}
