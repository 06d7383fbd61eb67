use std::time::Duration;

use crate::animation::transition::{AnimationDescriptor, Transition, VisualState};
use crate::foundation::core::{Unit, Vec2};

/// Mobile navigation overlay state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Slide-in overlay: parked one full width to the right when closed, at rest when open.
#[derive(Clone, Copy, Debug)]
pub struct MenuOverlay {
    state: MenuState,
    changed_at: Option<Duration>,
    transition: Transition,
}

impl MenuOverlay {
    pub fn new(transition: Transition) -> Self {
        Self {
            state: MenuState::Closed,
            changed_at: None,
            transition,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Set the state. Returns `false` when it was already `state`.
    pub fn set(&mut self, state: MenuState, now: Duration) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.changed_at = Some(now);
        true
    }

    fn parked() -> VisualState {
        VisualState::identity().with_translate(Vec2::new(100.0, 0.0), Unit::Percent)
    }

    fn shown() -> VisualState {
        VisualState::identity().with_translate(Vec2::ZERO, Unit::Percent)
    }

    /// Descriptor of the transition toward the current state.
    pub fn descriptor(&self) -> AnimationDescriptor {
        let enter = AnimationDescriptor::new(Self::parked(), Self::shown(), self.transition);
        match self.state {
            MenuState::Open => enter,
            MenuState::Closed => enter.reversed(),
        }
    }

    /// Overlay visual at `now`.
    pub fn sample(&self, now: Duration) -> VisualState {
        match self.changed_at {
            None => Self::parked(),
            Some(at) => self.descriptor().sample(now.saturating_sub(at)),
        }
    }

    /// `true` while the overlay is on screen, including while it slides out.
    pub fn is_visible(&self, now: Duration) -> bool {
        match (self.state, self.changed_at) {
            (MenuState::Open, _) => true,
            (MenuState::Closed, None) => false,
            (MenuState::Closed, Some(at)) => {
                !self.descriptor().is_finished(now.saturating_sub(at))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/menu.rs"]
mod tests;
