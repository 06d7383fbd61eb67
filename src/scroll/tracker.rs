/// Handle returned by [`ScrollTracker::subscribe`], used to revoke the subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(f64)>;

/// Republishes the viewport scroll offset to subscribers.
///
/// Consecutive identical offsets are coalesced into one notification. After [`detach`] the
/// tracker drops every listener and ignores further publications.
///
/// [`detach`]: ScrollTracker::detach
pub struct ScrollTracker {
    offset: f64,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
    detached: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScrollTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTracker")
            .field("offset", &self.offset)
            .field("listeners", &self.listeners.len())
            .field("detached", &self.detached)
            .finish()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            listeners: Vec::new(),
            next_id: 0,
            detached: false,
        }
    }

    /// Last published offset.
    pub fn current_offset(&self) -> f64 {
        self.offset
    }

    /// Register a listener invoked with every newly published offset.
    ///
    /// Returns `None` once the tracker has been detached.
    pub fn subscribe(&mut self, listener: impl FnMut(f64) + 'static) -> Option<Subscription> {
        if self.detached {
            tracing::trace!("subscribe on detached scroll tracker ignored");
            return None;
        }
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Some(id)
    }

    /// Revoke a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != sub);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Publish a new offset. Returns `true` if listeners were notified.
    pub fn publish(&mut self, offset: f64) -> bool {
        if self.detached {
            tracing::trace!(offset, "scroll event after detach ignored");
            return false;
        }
        if !offset.is_finite() {
            tracing::warn!(offset, "non-finite scroll offset ignored");
            return false;
        }
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        for (_, listener) in &mut self.listeners {
            listener(offset);
        }
        true
    }

    /// Drop all listeners and stop accepting publications.
    pub fn detach(&mut self) {
        self.listeners.clear();
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
