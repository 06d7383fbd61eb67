use std::time::Duration;

use crate::animation::transition::Transition;
use crate::foundation::core::RegionId;
use crate::nav::menu::{MenuOverlay, MenuState};
use crate::scroll::regions::RegionRegistry;

/// Resolved scroll request toward a region.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScrollCommand {
    /// Destination region.
    pub region: RegionId,
    /// Target scroll offset: region top minus the header offset, never negative.
    pub target: f64,
}

/// User-visible effect of a navigation intent, in the order it must be applied.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum NavAction {
    /// The menu overlay was closed.
    CloseMenu,
    /// The viewport must scroll.
    ScrollTo(ScrollCommand),
}

/// Menu overlay state plus in-page navigation.
#[derive(Debug)]
pub struct NavigationController {
    header_offset: f64,
    menu: MenuOverlay,
    last_command: Option<ScrollCommand>,
}

impl NavigationController {
    pub fn new(header_offset: f64, overlay: Transition) -> Self {
        Self {
            header_offset,
            menu: MenuOverlay::new(overlay),
            last_command: None,
        }
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn overlay(&self) -> &MenuOverlay {
        &self.menu
    }

    pub fn open_menu(&mut self, now: Duration) -> bool {
        self.menu.set(MenuState::Open, now)
    }

    pub fn close_menu(&mut self, now: Duration) -> bool {
        self.menu.set(MenuState::Closed, now)
    }

    /// Flip the menu and return the new state.
    pub fn toggle_menu(&mut self, now: Duration) -> MenuState {
        let next = match self.menu.state() {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.menu.set(next, now);
        next
    }

    /// Scroll offset that puts `region` just below the fixed header.
    pub fn resolve_target(&self, regions: &RegionRegistry, region: &RegionId) -> Option<f64> {
        let bounds = regions.bounds(region)?;
        Some((bounds.top - self.header_offset).max(0.0))
    }

    /// Handle "go to `region`".
    ///
    /// An open menu is closed first. The scroll is skipped when the region is not registered,
    /// which leaves the page where it is.
    pub fn navigate(
        &mut self,
        regions: &RegionRegistry,
        region: &RegionId,
        now: Duration,
    ) -> Vec<NavAction> {
        let mut actions = Vec::with_capacity(2);
        if self.close_menu(now) {
            actions.push(NavAction::CloseMenu);
        }
        match self.resolve_target(regions, region) {
            Some(target) => {
                let cmd = ScrollCommand {
                    region: region.clone(),
                    target,
                };
                self.last_command = Some(cmd.clone());
                actions.push(NavAction::ScrollTo(cmd));
            }
            None => {
                tracing::debug!(%region, "navigation to unregistered region skipped");
            }
        }
        actions
    }

    /// Most recent scroll command, which supersedes all earlier ones.
    pub fn last_command(&self) -> Option<&ScrollCommand> {
        self.last_command.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/controller.rs"]
mod tests;
