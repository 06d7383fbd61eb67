//! scrollfx is a headless animation engine for scroll-driven pages.
//!
//! The engine turns a continuously changing scroll offset and a set of registered page regions
//! into renderable values:
//!
//! - parallax offsets and fades per region ([`ParallaxRule`])
//! - an ambient particle field advanced on a fixed interval
//! - one-shot entrance animations triggered by visibility, optionally staggered
//! - a slide-in menu overlay and smooth in-page navigation
//!
//! A host (browser shell, native window, test harness) implements [`Viewport`], forwards scroll
//! events, and calls [`AnimationEngine::frame`] from its render loop.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod engine;
pub(crate) mod host;
pub(crate) mod nav;
pub(crate) mod parallax;
pub(crate) mod particles;
pub(crate) mod reveal;
pub(crate) mod scroll;

pub use crate::foundation::core::{Bounds, ElementId, Length, RegionId, Unit, Vec2};
pub use crate::foundation::error::{ScrollFxError, ScrollFxResult};

pub use crate::animation::ease::{Ease, Lerp};
pub use crate::animation::keyframes::{Keyframe, LoopMode, LoopTrack};
pub use crate::animation::spring::Spring;
pub use crate::animation::transition::{AnimationDescriptor, EasingClass, Transition, VisualState};
pub use crate::engine::config::{EngineConfig, ScrollMode};
pub use crate::engine::frame::Frame;
pub use crate::engine::runtime::{AnimationEngine, EnginePhase};
pub use crate::host::viewport::{
    InMemoryViewport, ListenerToken, ScrollBehavior, ScrollCall, Viewport,
};
pub use crate::nav::controller::{NavAction, NavigationController, ScrollCommand};
pub use crate::nav::menu::{MenuOverlay, MenuState};
pub use crate::parallax::mapper::{ParallaxMapper, RegionTransform};
pub use crate::parallax::progress::{AnchorRange, Anchors};
pub use crate::parallax::rule::{ParallaxProperty, ParallaxRule};
pub use crate::particles::field::{FieldSpec, Particle, ParticleSnapshot, SampleRange};
pub use crate::particles::simulator::ParticleSimulator;
pub use crate::reveal::animator::{EntranceState, IntersectionAnimator, Trigger, TriggeredEntrance};
pub use crate::reveal::stagger::Stagger;
pub use crate::reveal::visibility::RevealWindow;
pub use crate::scroll::regions::{BoundsProvider, RegionRegistry, TrackedRegion};
pub use crate::scroll::smooth::SmoothScroll;
pub use crate::scroll::tracker::{ScrollTracker, Subscription};
