use serde::{Deserialize, Serialize};

use crate::core::easing::Easing;

/// Scroll offset above which the fixed-top navbar collapses.
pub const NAV_COLLAPSE_THRESHOLD_PX: f64 = 50.0;
/// Duration of the anchor scroll animation in virtual milliseconds.
pub const ANCHOR_SCROLL_DURATION_MS: f64 = 1500.0;

/// Collapse state change produced by applying the threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTransition {
    Collapsed,
    Expanded,
}

/// Tuning for the navbar collapse rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavCollapseConfig {
    /// Collapse when the scroll offset is strictly greater than this.
    pub collapse_threshold_px: f64,
}

impl Default for NavCollapseConfig {
    fn default() -> Self {
        Self {
            collapse_threshold_px: NAV_COLLAPSE_THRESHOLD_PX,
        }
    }
}

/// Tuning for the animated scroll triggered by page-scroll anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollAnimationConfig {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for ScrollAnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: ANCHOR_SCROLL_DURATION_MS,
            easing: Easing::EaseInOutExpo,
        }
    }
}

/// Public scroll-animation runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollAnimationState {
    pub active: bool,
    pub from_px: f64,
    pub to_px: f64,
    pub elapsed_ms: f64,
}

impl Default for ScrollAnimationState {
    fn default() -> Self {
        Self {
            active: false,
            from_px: 0.0,
            to_px: 0.0,
            elapsed_ms: 0.0,
        }
    }
}

/// Result of advancing an active scroll animation by one clock step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub offset_px: f64,
    pub completed: bool,
}

/// Scroll-side interaction state: current offset, navbar collapse flag, and
/// the single in-flight anchor animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    nav_collapse_config: NavCollapseConfig,
    scroll_animation_config: ScrollAnimationConfig,
    nav_collapsed: bool,
    offset_px: f64,
    animation: ScrollAnimationState,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            nav_collapse_config: NavCollapseConfig::default(),
            scroll_animation_config: ScrollAnimationConfig::default(),
            nav_collapsed: false,
            offset_px: 0.0,
            animation: ScrollAnimationState::default(),
        }
    }
}

impl ScrollState {
    #[must_use]
    pub fn new(
        nav_collapse_config: NavCollapseConfig,
        scroll_animation_config: ScrollAnimationConfig,
    ) -> Self {
        Self {
            nav_collapse_config,
            scroll_animation_config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn nav_collapse_config(self) -> NavCollapseConfig {
        self.nav_collapse_config
    }

    #[must_use]
    pub fn scroll_animation_config(self) -> ScrollAnimationConfig {
        self.scroll_animation_config
    }

    #[must_use]
    pub fn nav_collapsed(self) -> bool {
        self.nav_collapsed
    }

    #[must_use]
    pub fn offset_px(self) -> f64 {
        self.offset_px
    }

    #[must_use]
    pub fn animation_state(self) -> ScrollAnimationState {
        self.animation
    }

    /// Records a new scroll offset. Non-finite offsets are ignored and leave
    /// the state untouched; the scroll path never fails.
    pub fn set_offset(&mut self, offset_px: f64) -> bool {
        if !offset_px.is_finite() {
            return false;
        }
        self.offset_px = offset_px;
        true
    }

    /// Re-evaluates the collapse threshold against the current offset.
    ///
    /// Returns `None` when the collapse flag did not change, which makes
    /// repeated identical offsets free of duplicate transitions.
    pub fn apply_collapse_rule(&mut self) -> Option<NavTransition> {
        let should_collapse = self.offset_px > self.nav_collapse_config.collapse_threshold_px;
        if should_collapse == self.nav_collapsed {
            return None;
        }
        self.nav_collapsed = should_collapse;
        Some(if should_collapse {
            NavTransition::Collapsed
        } else {
            NavTransition::Expanded
        })
    }

    /// Starts an animation from the current offset toward `to_px`.
    ///
    /// An animation already in flight is cancelled first; its position at
    /// cancellation is returned so callers can report the stop.
    pub fn start_scroll_animation(&mut self, to_px: f64) -> Option<f64> {
        let stopped_at = self.stop_scroll_animation();
        self.animation = ScrollAnimationState {
            active: true,
            from_px: self.offset_px,
            to_px,
            elapsed_ms: 0.0,
        };
        stopped_at
    }

    /// Stops the active animation, returning the offset it had reached.
    pub fn stop_scroll_animation(&mut self) -> Option<f64> {
        if !self.animation.active {
            return None;
        }
        self.animation = ScrollAnimationState::default();
        Some(self.offset_px)
    }

    /// Advances the active animation and returns the new offset.
    ///
    /// Returns `None` when no animation is active. On the final step the
    /// offset lands exactly on the target and the animation deactivates.
    pub fn step_scroll_animation(&mut self, delta_ms: f64) -> Option<ScrollStep> {
        if !self.animation.active {
            return None;
        }

        self.animation.elapsed_ms += delta_ms;
        let duration = self.scroll_animation_config.duration_ms;
        let completed = self.animation.elapsed_ms >= duration;
        self.offset_px = if completed {
            self.animation.to_px
        } else {
            let t = self.animation.elapsed_ms / duration;
            let eased = self.scroll_animation_config.easing.eval(t);
            self.animation.from_px + (self.animation.to_px - self.animation.from_px) * eased
        };

        if completed {
            self.animation = ScrollAnimationState::default();
        }

        Some(ScrollStep {
            offset_px: self.offset_px,
            completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_rule_is_idempotent_per_offset() {
        let mut state = ScrollState::default();
        assert!(state.set_offset(51.0));
        assert_eq!(state.apply_collapse_rule(), Some(NavTransition::Collapsed));
        assert_eq!(state.apply_collapse_rule(), None);
        assert!(state.set_offset(51.0));
        assert_eq!(state.apply_collapse_rule(), None);
    }

    #[test]
    fn threshold_is_exclusive_below() {
        let mut state = ScrollState::default();
        state.set_offset(50.0);
        assert_eq!(state.apply_collapse_rule(), None);
        assert!(!state.nav_collapsed());
        state.set_offset(50.0001);
        assert_eq!(state.apply_collapse_rule(), Some(NavTransition::Collapsed));
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let mut state = ScrollState::default();
        state.set_offset(120.0);
        assert!(!state.set_offset(f64::NAN));
        assert!(!state.set_offset(f64::INFINITY));
        assert!((state.offset_px() - 120.0).abs() <= 1e-12);
    }

    #[test]
    fn restart_cancels_previous_animation() {
        let mut state = ScrollState::default();
        state.start_scroll_animation(600.0);
        state.step_scroll_animation(750.0);
        let mid = state.offset_px();
        assert!(mid > 0.0 && mid < 600.0);

        let stopped_at = state.start_scroll_animation(0.0);
        assert_eq!(stopped_at, Some(mid));
        let step = state.step_scroll_animation(1500.0).expect("active");
        assert!(step.completed);
        assert_eq!(step.offset_px, 0.0);
    }

    #[test]
    fn final_step_lands_exactly_on_target() {
        let mut state = ScrollState::default();
        state.start_scroll_animation(600.0);
        let mut last = None;
        for _ in 0..10 {
            last = state.step_scroll_animation(150.0);
        }
        let step = last.expect("still active on final step");
        assert!(step.completed);
        assert_eq!(step.offset_px, 600.0);
        assert!(state.step_scroll_animation(150.0).is_none());
    }
}
