//! Bounded live-trace event buffer (§3, §4.8, §9).
//!
//! A ring of up to `capacity` events shared between per-tracer pipeline
//! producers and at most one `LiveTrace` subscriber. Pushes are no-ops while
//! nobody is subscribed, so an idle control plane never grows the ring for
//! nothing; once full, the oldest entry is overwritten rather than blocking
//! the producer (§9: "replaced by a bounded ring; behavior when full is
//! documented (drop oldest)").
//!
//! Only one subscription is honored at a time — a second concurrent
//! `subscribe()` still succeeds but never observes an event, matching §4.8's
//! "additional subscribers observe an empty stream".

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bpfd_core::Event;
use parking_lot::Mutex;

pub struct EventBuffer {
    capacity: usize,
    inner: Mutex<VecDeque<Event>>,
    subscribed: AtomicBool,
}

impl EventBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(EventBuffer {
            capacity,
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            subscribed: AtomicBool::new(false),
        })
    }

    /// Pushes `event`, dropping it entirely if no subscriber is attached.
    pub fn push(&self, event: Event) {
        if !self.subscribed.load(Ordering::Acquire) {
            return;
        }
        let mut guard = self.inner.lock();
        if guard.len() >= self.capacity {
            guard.pop_front();
        }
        guard.push_back(event);
    }

    /// Claims the single live-trace subscription slot. The returned
    /// [`Subscription`] is "active" only if no other subscription currently
    /// holds the slot; an inactive subscription's `try_pop` always returns
    /// `None`.
    pub fn subscribe(self: &Arc<Self>) -> Subscription {
        let active = self
            .subscribed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        Subscription {
            buffer: Arc::clone(self),
            active,
        }
    }

    fn try_pop(&self) -> Option<Event> {
        self.inner.lock().pop_front()
    }
}

/// A handle on the buffer's single subscription slot. Dropping it frees the
/// slot for the next subscriber.
pub struct Subscription {
    buffer: Arc<EventBuffer>,
    active: bool,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn try_pop(&self) -> Option<Event> {
        if self.active {
            self.buffer.try_pop()
        } else {
            None
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.active {
            self.buffer.subscribed.store(false, Ordering::Release);
        }
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
