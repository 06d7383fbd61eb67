use crate::animation::transition::VisualState;
use crate::foundation::core::RegionId;
use crate::nav::menu::MenuState;
use crate::parallax::mapper::RegionTransform;
use crate::particles::field::ParticleSnapshot;
use crate::reveal::animator::TriggeredEntrance;

/// Everything the renderer needs for one visual update.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Scroll offset the frame was computed from.
    pub scroll_offset: f64,
    /// Viewport height the frame was computed from.
    pub viewport_height: f64,
    /// Parallax output per registered region with rules.
    pub regions: Vec<(RegionId, RegionTransform)>,
    /// Particle positions in percent of the viewport.
    pub particles: Vec<ParticleSnapshot>,
    /// Entrances that started since the previous frame. Each element appears here once.
    pub triggered: Vec<TriggeredEntrance>,
    /// Menu state.
    pub menu: MenuState,
    /// Menu overlay visual while it is on screen.
    pub menu_overlay: Option<VisualState>,
    /// Current value of each looping track.
    pub loops: Vec<(String, f64)>,
}

impl Frame {
    pub fn region(&self, id: &RegionId) -> Option<&RegionTransform> {
        self.regions.iter().find(|(r, _)| r == id).map(|(_, t)| t)
    }

    pub fn loop_value(&self, name: &str) -> Option<f64> {
        self.loops.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }
}
