/// How the viewport should move to a new scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScrollBehavior {
    /// Jump immediately.
    Instant,
    /// Animate with the host's native smooth scrolling.
    Smooth,
}

/// Token identifying an attached scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerToken(pub u64);

/// Scrollable host surface the engine drives.
///
/// Scroll events flow the other way: the host forwards them to
/// [`AnimationEngine::handle_scroll`](crate::AnimationEngine::handle_scroll) for as long as the
/// engine's listener stays attached.
pub trait Viewport {
    /// Current scroll offset in pixels.
    fn scroll_offset(&self) -> f64;
    /// Visible height in pixels.
    fn viewport_height(&self) -> f64;
    /// Move the scroll offset. A new call replaces any smooth scroll still in progress.
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
    /// Stop a [`ScrollBehavior::Smooth`] scroll still in progress, leaving the offset where it
    /// is. A no-op when nothing is animating.
    fn cancel_scroll(&mut self);
    /// Attach a passive scroll listener.
    fn attach_scroll_listener(&mut self) -> ListenerToken;
    /// Detach a listener previously attached.
    fn detach_scroll_listener(&mut self, token: ListenerToken);
}

/// One recorded [`Viewport::scroll_to`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCall {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// In-memory viewport for tests and headless hosts.
///
/// Smooth scrolls complete instantly; every call is recorded in order.
#[derive(Debug, Default)]
pub struct InMemoryViewport {
    offset: f64,
    height: f64,
    document_height: Option<f64>,
    calls: Vec<ScrollCall>,
    cancels: usize,
    listeners: Vec<ListenerToken>,
    next_token: u64,
}

impl InMemoryViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Limit scrolling to `[0, document_height - viewport_height]`.
    pub fn with_document_height(mut self, document_height: f64) -> Self {
        self.document_height = Some(document_height);
        self
    }

    /// Simulate the user scrolling.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn calls(&self) -> &[ScrollCall] {
        &self.calls
    }

    /// Number of [`Viewport::cancel_scroll`] calls received.
    pub fn cancelled_scrolls(&self) -> usize {
        self.cancels
    }

    pub fn attached_listeners(&self) -> usize {
        self.listeners.len()
    }

    fn clamp(&self, offset: f64) -> f64 {
        let max = self
            .document_height
            .map(|d| (d - self.height).max(0.0))
            .unwrap_or(f64::INFINITY);
        offset.clamp(0.0, max)
    }
}

impl Viewport for InMemoryViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.calls.push(ScrollCall { top, behavior });
        self.offset = self.clamp(top);
    }

    fn cancel_scroll(&mut self) {
        self.cancels += 1;
    }

    fn attach_scroll_listener(&mut self) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.listeners.push(token);
        token
    }

    fn detach_scroll_listener(&mut self, token: ListenerToken) {
        self.listeners.retain(|t| *t != token);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/viewport.rs"]
mod tests;
