use std::collections::BTreeMap;
use std::time::Duration;

use crate::animation::transition::{AnimationDescriptor, VisualState};
use crate::foundation::core::ElementId;
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::reveal::stagger::Stagger;
use crate::reveal::visibility::RevealWindow;
use crate::scroll::regions::BoundsProvider;

/// One-shot entrance state of an observed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum EntranceState {
    /// Not yet seen.
    Pending,
    /// Entrance started. Terminal.
    Triggered,
}

/// What makes an element's entrance start.
pub enum Trigger {
    /// Enters the inset viewport, judged from live geometry on every scroll.
    InView(BoundsProvider),
    /// Enters the viewport as reported by the host's own intersection signal.
    Reported,
    /// Plays as soon as the engine mounts.
    Mount,
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InView(_) => f.write_str("InView(..)"),
            Self::Reported => f.write_str("Reported"),
            Self::Mount => f.write_str("Mount"),
        }
    }
}

/// Emitted once per element on its Pending → Triggered edge.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TriggeredEntrance {
    /// Element that started animating.
    pub id: ElementId,
    /// Animation to play, including its stagger delay.
    pub descriptor: AnimationDescriptor,
    /// Engine time of the trigger.
    pub at: Duration,
}

#[derive(Debug)]
struct Observed {
    id: ElementId,
    trigger: Trigger,
    descriptor: AnimationDescriptor,
    state: EntranceState,
    triggered_at: Option<Duration>,
}

impl Observed {
    /// Pending → Triggered. Returns the edge event, or `None` if already triggered.
    fn fire(&mut self, now: Duration) -> Option<TriggeredEntrance> {
        if self.state == EntranceState::Triggered {
            return None;
        }
        self.state = EntranceState::Triggered;
        self.triggered_at = Some(now);
        Some(TriggeredEntrance {
            id: self.id.clone(),
            descriptor: self.descriptor,
            at: now,
        })
    }
}

/// Drives one-shot entrance animations from visibility.
///
/// Each element moves from [`EntranceState::Pending`] to [`EntranceState::Triggered`] at most
/// once. Scrolling it back out of view does nothing.
#[derive(Debug)]
pub struct IntersectionAnimator {
    elements: Vec<Observed>,
    by_id: BTreeMap<ElementId, usize>,
    margin: f64,
    threshold: f64,
    outbox: Vec<TriggeredEntrance>,
    disconnected: bool,
}

impl IntersectionAnimator {
    /// `margin` insets the viewport on top and bottom; `threshold` is the minimum visible
    /// fraction (0 means any overlap).
    pub fn new(margin: f64, threshold: f64) -> Self {
        Self {
            elements: Vec::new(),
            by_id: BTreeMap::new(),
            margin,
            threshold,
            outbox: Vec::new(),
            disconnected: false,
        }
    }

    /// Observe a single element.
    pub fn observe(
        &mut self,
        id: ElementId,
        trigger: Trigger,
        descriptor: AnimationDescriptor,
    ) -> ScrollFxResult<()> {
        if self.disconnected {
            return Err(ScrollFxError::validation(
                "cannot observe elements after the animator was disconnected",
            ));
        }
        descriptor.transition.validate()?;
        if self.by_id.contains_key(&id) {
            return Err(ScrollFxError::validation(format!(
                "element '{id}' is already observed"
            )));
        }
        self.by_id.insert(id.clone(), self.elements.len());
        self.elements.push(Observed {
            id,
            trigger,
            descriptor,
            state: EntranceState::Pending,
            triggered_at: None,
        });
        Ok(())
    }

    /// Observe a group sharing one entrance, delayed per index by `stagger`.
    ///
    /// The stagger delay is added to the descriptor's own delay. Either every member is
    /// registered or none is.
    pub fn observe_group(
        &mut self,
        members: Vec<(ElementId, Trigger)>,
        descriptor: AnimationDescriptor,
        stagger: Stagger,
    ) -> ScrollFxResult<()> {
        if self.disconnected {
            return Err(ScrollFxError::validation(
                "cannot observe elements after the animator was disconnected",
            ));
        }
        descriptor.transition.validate()?;
        let mut seen = std::collections::BTreeSet::new();
        for (id, _) in &members {
            if self.by_id.contains_key(id) || !seen.insert(id) {
                return Err(ScrollFxError::validation(format!(
                    "element '{id}' is already observed"
                )));
            }
        }
        for (index, (id, trigger)) in members.into_iter().enumerate() {
            let delay = descriptor.delay + stagger.delay_for(index);
            self.observe(id, trigger, descriptor.with_delay(delay))?;
        }
        Ok(())
    }

    /// Stop observing an element. Its state is forgotten.
    pub fn unobserve(&mut self, id: &ElementId) -> bool {
        let Some(idx) = self.by_id.remove(id) else {
            return false;
        };
        self.elements.remove(idx);
        for slot in self.by_id.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        true
    }

    /// Trigger every mount-time entrance.
    pub fn trigger_mounted(&mut self, now: Duration) -> usize {
        if self.disconnected {
            return 0;
        }
        let before = self.outbox.len();
        for el in &mut self.elements {
            if matches!(el.trigger, Trigger::Mount)
                && let Some(ev) = el.fire(now)
            {
                self.outbox.push(ev);
            }
        }
        self.outbox.len() - before
    }

    /// Re-test geometry-driven elements against the current viewport.
    ///
    /// Returns the number of elements that triggered on this call.
    pub fn update(&mut self, scroll_offset: f64, viewport_height: f64, now: Duration) -> usize {
        if self.disconnected {
            return 0;
        }
        let window = RevealWindow::new(scroll_offset, viewport_height, self.margin);
        let before = self.outbox.len();
        for el in &mut self.elements {
            if el.state == EntranceState::Triggered {
                continue;
            }
            let Trigger::InView(bounds) = &el.trigger else {
                continue;
            };
            let visible = window.is_visible(bounds(), self.threshold);
            if visible && let Some(ev) = el.fire(now) {
                self.outbox.push(ev);
            }
        }
        self.outbox.len() - before
    }

    /// Host-reported intersection ratio for an element.
    ///
    /// Returns `true` if this report triggered the entrance. Unknown ids are ignored.
    pub fn report_intersection(&mut self, id: &ElementId, ratio: f64, now: Duration) -> bool {
        if self.disconnected {
            return false;
        }
        let Some(&idx) = self.by_id.get(id) else {
            tracing::trace!(%id, "intersection report for unobserved element ignored");
            return false;
        };
        let visible = if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        };
        if !visible {
            return false;
        }
        match self.elements[idx].fire(now) {
            Some(ev) => {
                self.outbox.push(ev);
                true
            }
            None => false,
        }
    }

    /// Take the edge events produced since the last drain.
    pub fn drain_triggered(&mut self) -> Vec<TriggeredEntrance> {
        std::mem::take(&mut self.outbox)
    }

    pub fn state(&self, id: &ElementId) -> Option<EntranceState> {
        self.by_id.get(id).map(|&i| self.elements[i].state)
    }

    pub fn descriptor(&self, id: &ElementId) -> Option<&AnimationDescriptor> {
        self.by_id.get(id).map(|&i| &self.elements[i].descriptor)
    }

    /// Current visual state of an element at engine time `now`.
    pub fn sample(&self, id: &ElementId, now: Duration) -> Option<VisualState> {
        let el = &self.elements[*self.by_id.get(id)?];
        Some(match el.triggered_at {
            None => el.descriptor.from,
            Some(at) => el.descriptor.sample(now.saturating_sub(at)),
        })
    }

    /// Number of elements still waiting for their entrance.
    pub fn pending_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| e.state == EntranceState::Pending)
            .count()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Release every observer. Later updates and reports are ignored.
    pub fn disconnect(&mut self) {
        self.elements.clear();
        self.by_id.clear();
        self.outbox.clear();
        self.disconnected = true;
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/animator.rs"]
mod tests;
