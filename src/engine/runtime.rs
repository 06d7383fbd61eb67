use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::keyframes::LoopTrack;
use crate::animation::transition::AnimationDescriptor;
use crate::engine::config::{EngineConfig, ScrollMode};
use crate::engine::frame::Frame;
use crate::foundation::core::{Bounds, ElementId, RegionId};
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::foundation::rng::entropy_seed;
use crate::host::viewport::{ListenerToken, ScrollBehavior, Viewport};
use crate::nav::controller::{NavAction, NavigationController};
use crate::nav::menu::MenuState;
use crate::parallax::mapper::{ParallaxMapper, RegionTransform};
use crate::parallax::rule::ParallaxRule;
use crate::particles::field::ParticleSnapshot;
use crate::particles::simulator::ParticleSimulator;
use crate::reveal::animator::{EntranceState, IntersectionAnimator, Trigger};
use crate::reveal::stagger::Stagger;
use crate::scroll::regions::{RegionRegistry, TrackedRegion};
use crate::scroll::smooth::SmoothScroll;
use crate::scroll::tracker::{ScrollTracker, Subscription};

/// Lifecycle of an [`AnimationEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    /// Built; registrations allowed, nothing running.
    Created,
    /// Listener attached and timers running.
    Mounted,
    /// Torn down. Every later event is ignored.
    Disposed,
}

/// Owns the scroll tracker, parallax mapper, particle simulator, entrance animator and navigation
/// controller for one page view.
///
/// The host forwards scroll events to [`handle_scroll`](Self::handle_scroll) and drives time
/// through [`tick`](Self::tick) / [`frame`](Self::frame) with a monotonic timestamp. Dropping or
/// [`dispose`](Self::dispose)-ing the engine releases the scroll listener, the particle interval,
/// every visibility observer and any smooth scroll in flight.
pub struct AnimationEngine<V: Viewport> {
    config: EngineConfig,
    viewport: V,
    phase: EnginePhase,
    listener: Option<ListenerToken>,
    now: Duration,
    mounted_at: Duration,

    tracker: ScrollTracker,
    scroll_dirty: Rc<Cell<bool>>,
    regions: RegionRegistry,
    parallax: ParallaxMapper,
    particles: Option<ParticleSimulator>,
    reveals: IntersectionAnimator,
    nav: NavigationController,
    smooth: Option<SmoothScroll>,
    native_scroll_issued: bool,
    loops: Vec<(String, LoopTrack<f64>)>,
}

impl<V: Viewport> AnimationEngine<V> {
    /// Build an engine. Nothing runs until [`mount`](Self::mount).
    pub fn new(config: EngineConfig, viewport: V) -> ScrollFxResult<Self> {
        config.validate()?;
        let smooth = match config.scroll {
            ScrollMode::Native => None,
            ScrollMode::Animated { duration_ms, ease } => {
                Some(SmoothScroll::new(Duration::from_millis(duration_ms), ease))
            }
        };
        Ok(Self {
            reveals: IntersectionAnimator::new(config.reveal_margin, config.reveal_threshold),
            nav: NavigationController::new(config.header_offset, config.menu_transition),
            config,
            viewport,
            phase: EnginePhase::Created,
            listener: None,
            now: Duration::ZERO,
            mounted_at: Duration::ZERO,
            tracker: ScrollTracker::new(),
            scroll_dirty: Rc::new(Cell::new(true)),
            regions: RegionRegistry::new(),
            parallax: ParallaxMapper::new(),
            particles: None,
            smooth,
            native_scroll_issued: false,
            loops: Vec::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    fn ensure_not_disposed(&self) -> ScrollFxResult<()> {
        if self.phase == EnginePhase::Disposed {
            return Err(ScrollFxError::validation("engine has been disposed"));
        }
        Ok(())
    }

    fn is_mounted(&self) -> bool {
        self.phase == EnginePhase::Mounted
    }

    // --- registration -------------------------------------------------------------------------

    /// Register (or replace) a region with a live geometry query.
    pub fn register_region(
        &mut self,
        id: impl Into<RegionId>,
        bounds: impl Fn() -> Bounds + 'static,
    ) -> ScrollFxResult<()> {
        self.ensure_not_disposed()?;
        let region = TrackedRegion::new(id, bounds);
        tracing::trace!(region = %region.id, "region registered");
        self.regions.insert(region);
        self.scroll_dirty.set(true);
        Ok(())
    }

    /// Forget a region. Navigation to it becomes a no-op.
    pub fn unregister_region(&mut self, id: &RegionId) -> bool {
        self.regions.remove(id).is_some()
    }

    /// Attach a parallax rule to a region. The region may be registered later.
    pub fn add_parallax_rule(
        &mut self,
        id: impl Into<RegionId>,
        rule: ParallaxRule,
    ) -> ScrollFxResult<()> {
        self.ensure_not_disposed()?;
        self.parallax.add_rule(id.into(), rule)
    }

    /// Observe one element for a one-shot entrance at host time `now`.
    ///
    /// A [`Trigger::Mount`] element observed after mount plays from `now`.
    pub fn observe(
        &mut self,
        id: impl Into<ElementId>,
        trigger: Trigger,
        descriptor: AnimationDescriptor,
        now: Duration,
    ) -> ScrollFxResult<()> {
        self.ensure_not_disposed()?;
        let mount_trigger = matches!(trigger, Trigger::Mount);
        self.reveals.observe(id.into(), trigger, descriptor)?;
        if self.is_mounted() && mount_trigger {
            self.now = self.now.max(now);
            self.reveals.trigger_mounted(self.now);
        }
        self.scroll_dirty.set(true);
        Ok(())
    }

    /// Observe a group staggered by the configured default step.
    pub fn observe_group(
        &mut self,
        members: Vec<(ElementId, Trigger)>,
        descriptor: AnimationDescriptor,
        now: Duration,
    ) -> ScrollFxResult<()> {
        let stagger = Stagger::new(self.config.stagger_step());
        self.observe_group_with(members, descriptor, stagger, now)
    }

    /// Observe a group with an explicit stagger.
    pub fn observe_group_with(
        &mut self,
        members: Vec<(ElementId, Trigger)>,
        descriptor: AnimationDescriptor,
        stagger: Stagger,
        now: Duration,
    ) -> ScrollFxResult<()> {
        self.ensure_not_disposed()?;
        self.reveals.observe_group(members, descriptor, stagger)?;
        if self.is_mounted() {
            self.now = self.now.max(now);
            self.reveals.trigger_mounted(self.now);
        }
        self.scroll_dirty.set(true);
        Ok(())
    }

    /// Add a looping decorative track, sampled from mount time.
    pub fn add_loop(
        &mut self,
        name: impl Into<String>,
        track: LoopTrack<f64>,
    ) -> ScrollFxResult<()> {
        self.ensure_not_disposed()?;
        track.validate()?;
        self.loops.push((name.into(), track));
        Ok(())
    }

    // --- lifecycle ----------------------------------------------------------------------------

    /// Start the engine at host time `now`.
    ///
    /// Attaches the scroll listener, generates the particle field, arms the particle interval
    /// and plays mount-time entrances. Mounting twice is a no-op; mounting after disposal fails.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, now: Duration) -> ScrollFxResult<()> {
        match self.phase {
            EnginePhase::Disposed => {
                return Err(ScrollFxError::validation("cannot mount a disposed engine"));
            }
            EnginePhase::Mounted => {
                tracing::warn!("engine already mounted");
                return Ok(());
            }
            EnginePhase::Created => {}
        }

        self.now = now;
        self.mounted_at = now;
        self.listener = Some(self.viewport.attach_scroll_listener());

        let dirty = self.scroll_dirty.clone();
        self.tracker.subscribe(move |_| dirty.set(true));
        self.tracker.publish(self.viewport.scroll_offset());

        let seed = self.config.seed.unwrap_or_else(entropy_seed);
        let mut particles = ParticleSimulator::new(
            &self.config.particles,
            seed,
            self.config.particle_tick(),
            self.config.max_catch_up_ticks,
        );
        particles.start(now);
        self.particles = Some(particles);

        self.phase = EnginePhase::Mounted;
        let mounted = self.reveals.trigger_mounted(now);
        self.refresh_reveals();

        tracing::debug!(
            seed,
            particles = self.config.particles.count,
            regions = self.regions.len(),
            observed = self.reveals.len(),
            mounted,
            "engine mounted"
        );
        Ok(())
    }

    /// Tear everything down. Idempotent.
    pub fn dispose(&mut self) {
        if self.phase == EnginePhase::Disposed {
            return;
        }
        if let Some(token) = self.listener.take() {
            self.viewport.detach_scroll_listener(token);
        }
        self.tracker.detach();
        if let Some(particles) = self.particles.as_mut() {
            particles.cancel();
        }
        self.particles = None;
        self.reveals.disconnect();
        if let Some(smooth) = self.smooth.as_mut() {
            smooth.cancel();
        }
        // The host may still be animating the last native scroll.
        if std::mem::take(&mut self.native_scroll_issued) {
            self.viewport.cancel_scroll();
        }
        self.regions.clear();
        self.parallax.clear();
        self.loops.clear();
        self.phase = EnginePhase::Disposed;
        tracing::debug!("engine disposed");
    }

    // --- host events --------------------------------------------------------------------------

    /// Scroll event from the host's passive listener.
    pub fn handle_scroll(&mut self, offset: f64) {
        if !self.is_mounted() {
            tracing::trace!(offset, phase = ?self.phase, "scroll event ignored");
            return;
        }
        self.tracker.publish(offset);
    }

    /// Layout or viewport size changed; re-test entrances on the next tick.
    pub fn handle_resize(&mut self) {
        if self.is_mounted() {
            self.scroll_dirty.set(true);
        }
    }

    /// Host-side intersection signal for an element observed with [`Trigger::Reported`].
    pub fn report_intersection(&mut self, id: &ElementId, ratio: f64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.reveals.report_intersection(id, ratio, self.now)
    }

    /// Advance time-driven state to host time `now`.
    pub fn tick(&mut self, now: Duration) {
        if !self.is_mounted() {
            tracing::trace!(phase = ?self.phase, "tick ignored");
            return;
        }
        self.now = self.now.max(now);

        if let Some(particles) = self.particles.as_mut() {
            particles.advance(self.now);
        }

        if let Some(offset) = self.smooth.as_mut().and_then(|s| s.sample(self.now)) {
            self.viewport.scroll_to(offset, ScrollBehavior::Instant);
            self.tracker.publish(self.viewport.scroll_offset());
        }

        if self.scroll_dirty.replace(false) {
            self.refresh_reveals();
        }
    }

    fn refresh_reveals(&mut self) {
        let offset = self.tracker.current_offset();
        let height = self.viewport.viewport_height();
        let fired = self.reveals.update(offset, height, self.now);
        if fired > 0 {
            tracing::trace!(fired, offset, "entrances triggered");
        }
    }

    /// Tick to `now` and collect the renderer's view of the engine.
    ///
    /// Returns `None` unless mounted, in which case the renderer keeps its static layout.
    pub fn frame(&mut self, now: Duration) -> Option<Frame> {
        if !self.is_mounted() {
            return None;
        }
        self.tick(now);

        let offset = self.tracker.current_offset();
        let height = self.viewport.viewport_height();
        let since_mount = self.now.saturating_sub(self.mounted_at);
        let overlay = self.nav.overlay();

        Some(Frame {
            scroll_offset: offset,
            viewport_height: height,
            regions: self.parallax.transforms(&self.regions, offset, height),
            particles: self.particle_snapshot(),
            triggered: self.reveals.drain_triggered(),
            menu: overlay.state(),
            menu_overlay: overlay
                .is_visible(self.now)
                .then(|| overlay.sample(self.now)),
            loops: self
                .loops
                .iter()
                .map(|(name, track)| (name.clone(), track.sample(since_mount)))
                .collect(),
        })
    }

    // --- navigation ---------------------------------------------------------------------------

    /// Navigate to a region: close the menu if open, then scroll below the header.
    ///
    /// Returns the applied actions in order. Unknown regions produce no scroll.
    #[tracing::instrument(skip(self))]
    pub fn navigate_to(&mut self, region: &RegionId, now: Duration) -> Vec<NavAction> {
        if !self.is_mounted() {
            tracing::trace!(phase = ?self.phase, "navigation ignored");
            return Vec::new();
        }
        self.now = self.now.max(now);
        let actions = self.nav.navigate(&self.regions, region, self.now);
        for action in &actions {
            let NavAction::ScrollTo(cmd) = action else {
                continue;
            };
            match self.smooth.as_mut() {
                Some(smooth) => {
                    smooth.start(self.viewport.scroll_offset(), cmd.target, self.now);
                }
                None => {
                    self.viewport.scroll_to(cmd.target, ScrollBehavior::Smooth);
                    self.native_scroll_issued = true;
                }
            }
            tracing::debug!(region = %cmd.region, offset = cmd.target, "navigation scroll issued");
        }
        actions
    }

    /// Flip the menu overlay. Returns the new state; stays closed unless mounted.
    pub fn toggle_menu(&mut self, now: Duration) -> MenuState {
        if !self.is_mounted() {
            return self.nav.menu_state();
        }
        self.now = self.now.max(now);
        self.nav.toggle_menu(self.now)
    }

    pub fn open_menu(&mut self, now: Duration) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.now = self.now.max(now);
        self.nav.open_menu(self.now)
    }

    pub fn close_menu(&mut self, now: Duration) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.now = self.now.max(now);
        self.nav.close_menu(self.now)
    }

    // --- queries ------------------------------------------------------------------------------

    pub fn menu_state(&self) -> MenuState {
        self.nav.menu_state()
    }

    /// Last published scroll offset.
    pub fn current_offset(&self) -> f64 {
        self.tracker.current_offset()
    }

    /// Subscribe to scroll offset updates. `None` once disposed.
    pub fn subscribe_scroll(
        &mut self,
        listener: impl FnMut(f64) + 'static,
    ) -> Option<Subscription> {
        self.tracker.subscribe(listener)
    }

    pub fn unsubscribe_scroll(&mut self, sub: Subscription) -> bool {
        self.tracker.unsubscribe(sub)
    }

    /// Parallax output for one region, recomputed from the current offset and geometry.
    pub fn region_transform(&self, id: &RegionId) -> Option<RegionTransform> {
        self.parallax.transform(
            &self.regions,
            id,
            self.tracker.current_offset(),
            self.viewport.viewport_height(),
        )
    }

    pub fn particle_snapshot(&self) -> Vec<ParticleSnapshot> {
        self.particles
            .as_ref()
            .map(|p| p.snapshot())
            .unwrap_or_default()
    }

    pub fn entrance_state(&self, id: &ElementId) -> Option<EntranceState> {
        self.reveals.state(id)
    }

    pub fn entrance_descriptor(&self, id: &ElementId) -> Option<&AnimationDescriptor> {
        self.reveals.descriptor(id)
    }
}

impl<V: Viewport> Drop for AnimationEngine<V> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<V: Viewport> std::fmt::Debug for AnimationEngine<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationEngine")
            .field("phase", &self.phase)
            .field("now", &self.now)
            .field("offset", &self.tracker.current_offset())
            .field("regions", &self.regions.len())
            .field("observed", &self.reveals.len())
            .field("menu", &self.nav.menu_state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/runtime.rs"]
mod tests;
