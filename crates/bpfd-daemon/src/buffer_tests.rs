use super::*;

fn sample_event(command: &str) -> Event {
    Event::new(1, 1, command, 0)
}

#[test]
fn push_without_a_subscriber_is_a_no_op() {
    let buffer = EventBuffer::new(4);
    buffer.push(sample_event("a"));
    let sub = buffer.subscribe();
    assert_eq!(sub.try_pop(), None);
}

#[test]
fn subscriber_observes_pushed_events_in_order() {
    let buffer = EventBuffer::new(4);
    let sub = buffer.subscribe();
    buffer.push(sample_event("a"));
    buffer.push(sample_event("b"));
    assert_eq!(sub.try_pop().unwrap().command, "a");
    assert_eq!(sub.try_pop().unwrap().command, "b");
    assert_eq!(sub.try_pop(), None);
}

#[test]
fn full_buffer_overwrites_the_oldest_entry() {
    let buffer = EventBuffer::new(2);
    let sub = buffer.subscribe();
    buffer.push(sample_event("a"));
    buffer.push(sample_event("b"));
    buffer.push(sample_event("c"));
    assert_eq!(sub.try_pop().unwrap().command, "b");
    assert_eq!(sub.try_pop().unwrap().command, "c");
    assert_eq!(sub.try_pop(), None);
}

#[test]
fn second_concurrent_subscriber_observes_an_empty_stream() {
    let buffer = EventBuffer::new(4);
    let first = buffer.subscribe();
    let second = buffer.subscribe();
    assert!(first.is_active());
    assert!(!second.is_active());

    buffer.push(sample_event("a"));
    assert_eq!(second.try_pop(), None);
    assert_eq!(first.try_pop().unwrap().command, "a");
}

#[test]
fn dropping_a_subscription_frees_the_slot_for_the_next_subscriber() {
    let buffer = EventBuffer::new(4);
    {
        let first = buffer.subscribe();
        assert!(first.is_active());
    }
    let second = buffer.subscribe();
    assert!(second.is_active());
}
