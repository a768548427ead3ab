use serde::{Deserialize, Serialize};

use crate::core::RevealTarget;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    pub scroll_offset_px: f64,
    pub nav_collapsed: bool,
    pub scroll_animation_active: bool,
    pub reveal_begun: bool,
    pub reveal_clock_ms: f64,
}

/// Event stream exposed to observers.
///
/// Scroll events carry document offsets; reveal events carry the affected
/// target. `ScrollAnimationStopped` means cancelled by a new anchor click,
/// `ScrollAnimationCompleted` means the target offset was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PageEvent {
    NavCollapsed,
    NavExpanded,
    ScrollAnimationStarted { from_px: f64, to_px: f64 },
    ScrollAnimationStopped { at_px: f64 },
    ScrollAnimationCompleted { at_px: f64 },
    RevealBegun,
    RevealFadeStarted { target: RevealTarget },
    RevealFadeCompleted { target: RevealTarget },
    RevealCompleted,
}

/// Subscription hook interface for bounded custom logic.
///
/// Observers can watch page events and read engine context without mutating
/// engine internals directly.
pub trait PageObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PageEvent, context: PageContext);
}
