use std::fmt;

use tracing::{debug, trace, warn};

use crate::core::{PageModel, RevealTarget};
use crate::error::SplashResult;
use crate::extensions::{PageEvent, PageObserver};
use crate::interaction::{
    NavCollapseConfig, NavTransition, ScrollAnimationConfig, ScrollAnimationState, ScrollState,
};

use super::engine_config::PageEngineConfig;
use super::reveal_timeline::{RevealTimeline, RevealTransition};
use super::validation;

/// Outcome of routing an anchor click through the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorClickOutcome {
    /// The anchor is unknown or not marked for page scrolling; the host
    /// should let its default navigation run.
    DefaultNavigation,
    /// Default navigation is suppressed; an animation now runs toward the
    /// returned offset.
    ScrollStarted { target_offset_px: f64 },
    /// Default navigation is suppressed but the fragment matches no section,
    /// so nothing scrolls.
    TargetMissing,
}

/// Facade driving the splash-page behaviors against a static page model.
///
/// The engine never reads a wall clock. Hosts feed it scroll offsets via
/// [`on_scroll`](Self::on_scroll), clicks via
/// [`click_anchor`](Self::click_anchor), and time via
/// [`advance`](Self::advance); every outcome is a pure function of that
/// input sequence. State changes fan out to registered
/// [`PageObserver`](crate::extensions::PageObserver)s.
pub struct PageEngine {
    model: PageModel,
    pub(super) scroll: ScrollState,
    pub(super) reveal: RevealTimeline,
    pub(super) observers: Vec<Box<dyn PageObserver>>,
}

impl fmt::Debug for PageEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageEngine")
            .field("model", &self.model)
            .field("scroll", &self.scroll)
            .field("reveal", &self.reveal)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PageEngine {
    pub fn new(model: PageModel, config: PageEngineConfig) -> SplashResult<Self> {
        model.validate()?;
        let nav_collapse = validation::validate_nav_collapse_config(config.nav_collapse)?;
        let anchor_scroll = validation::validate_scroll_animation_config(config.anchor_scroll)?;
        let reveal = RevealTimeline::new(config.reveal)?;

        debug!(
            sections = model.section_count(),
            anchors = model.anchors().len(),
            reveal_steps = reveal.sequence().len(),
            "page engine initialized"
        );

        Ok(Self {
            model,
            scroll: ScrollState::new(nav_collapse, anchor_scroll),
            reveal,
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &PageModel {
        &self.model
    }

    #[must_use]
    pub fn nav_collapse_config(&self) -> NavCollapseConfig {
        self.scroll.nav_collapse_config()
    }

    #[must_use]
    pub fn scroll_animation_config(&self) -> ScrollAnimationConfig {
        self.scroll.scroll_animation_config()
    }

    #[must_use]
    pub fn nav_collapsed(&self) -> bool {
        self.scroll.nav_collapsed()
    }

    #[must_use]
    pub fn scroll_offset_px(&self) -> f64 {
        self.scroll.offset_px()
    }

    #[must_use]
    pub fn scroll_animation(&self) -> ScrollAnimationState {
        self.scroll.animation_state()
    }

    #[must_use]
    pub fn scroll_animation_active(&self) -> bool {
        self.scroll.animation_state().active
    }

    /// Host scroll handler. Records the offset and re-evaluates the navbar
    /// collapse rule; returns whether the collapse state changed. Non-finite
    /// offsets are ignored, and a page without a navbar never collapses.
    pub fn on_scroll(&mut self, offset_px: f64) -> bool {
        if !self.scroll.set_offset(offset_px) {
            warn!(offset_px, "ignoring non-finite scroll offset");
            return false;
        }
        trace!(offset_px, "scroll offset recorded");
        if !self.model.has_navbar() {
            return false;
        }
        self.apply_collapse_transition()
    }

    /// Routes a click on the anchor with id `anchor_id`.
    ///
    /// Only anchors marked for page scrolling intercept the click. A marked
    /// anchor whose fragment matches no section suppresses navigation but
    /// scrolls nowhere. Starting a scroll while one is in flight cancels the
    /// old animation first; nothing queues.
    pub fn click_anchor(&mut self, anchor_id: &str) -> AnchorClickOutcome {
        let Some(anchor) = self.model.anchor(anchor_id) else {
            return AnchorClickOutcome::DefaultNavigation;
        };
        if !anchor.page_scroll {
            return AnchorClickOutcome::DefaultNavigation;
        }
        let Some(target_offset_px) = self.model.section_top(&anchor.fragment) else {
            debug!(
                anchor = anchor_id,
                fragment = %anchor.fragment,
                "anchor target missing, navigation suppressed without scrolling"
            );
            return AnchorClickOutcome::TargetMissing;
        };

        if let Some(at_px) = self.scroll.stop_scroll_animation() {
            self.emit_page_event(PageEvent::ScrollAnimationStopped { at_px });
        }
        let from_px = self.scroll.offset_px();
        self.scroll.start_scroll_animation(target_offset_px);
        self.emit_page_event(PageEvent::ScrollAnimationStarted {
            from_px,
            to_px: target_offset_px,
        });
        debug!(
            anchor = anchor_id,
            from_px,
            to_px = target_offset_px,
            "anchor scroll animation started"
        );
        AnchorClickOutcome::ScrollStarted { target_offset_px }
    }

    /// Advances the virtual clock by `delta_ms`.
    ///
    /// Steps the scroll animation first, re-applying the collapse rule so the
    /// navbar reacts mid-flight, then advances the reveal timeline. Deltas
    /// must be finite and positive.
    pub fn advance(&mut self, delta_ms: f64) -> SplashResult<()> {
        validation::validate_advance_delta(delta_ms)?;

        if let Some(step) = self.scroll.step_scroll_animation(delta_ms) {
            if self.model.has_navbar() {
                self.apply_collapse_transition();
            }
            if step.completed {
                self.emit_page_event(PageEvent::ScrollAnimationCompleted {
                    at_px: step.offset_px,
                });
            }
        }

        let was_complete = self.reveal.is_complete();
        let transitions = self.reveal.advance(delta_ms)?;
        for transition in transitions {
            let event = match transition {
                RevealTransition::FadeStarted(target) => PageEvent::RevealFadeStarted { target },
                RevealTransition::FadeCompleted(target) => {
                    PageEvent::RevealFadeCompleted { target }
                }
            };
            self.emit_page_event(event);
        }
        if !was_complete && self.reveal.is_complete() {
            self.emit_page_event(PageEvent::RevealCompleted);
        }

        Ok(())
    }

    /// Starts the reveal choreography, or restarts it from scratch when
    /// called again: every target hides and the reveal clock rewinds to zero.
    pub fn begin_reveal(&mut self) {
        self.reveal.begin();
        debug!(
            steps = self.reveal.sequence().len(),
            "reveal choreography begun"
        );
        self.emit_page_event(PageEvent::RevealBegun);
        if self.reveal.is_complete() {
            self.emit_page_event(PageEvent::RevealCompleted);
        }
    }

    #[must_use]
    pub fn reveal_has_begun(&self) -> bool {
        self.reveal.has_begun()
    }

    #[must_use]
    pub fn reveal_clock_ms(&self) -> f64 {
        self.reveal.clock_ms()
    }

    #[must_use]
    pub fn is_reveal_complete(&self) -> bool {
        self.reveal.is_complete()
    }

    /// Opacity of a reveal target at the current clock.
    #[must_use]
    pub fn opacity_of(&self, target: RevealTarget) -> f64 {
        self.reveal.opacity_of(target)
    }

    /// Opacity for a page section. The intro section and unknown ids always
    /// read fully visible; other known sections follow the `Sections` group.
    #[must_use]
    pub fn section_opacity(&self, section_id: &str) -> f64 {
        if self.model.is_intro(section_id) || self.model.section_top(section_id).is_none() {
            return 1.0;
        }
        self.reveal.opacity_of(RevealTarget::Sections)
    }

    /// Tears down host-facing hooks: drops every registered observer and
    /// cancels any animation in flight. The engine stays queryable.
    pub fn dispose(&mut self) {
        self.observers.clear();
        self.scroll.stop_scroll_animation();
        debug!("page engine disposed");
    }

    fn apply_collapse_transition(&mut self) -> bool {
        match self.scroll.apply_collapse_rule() {
            Some(NavTransition::Collapsed) => {
                self.emit_page_event(PageEvent::NavCollapsed);
                true
            }
            Some(NavTransition::Expanded) => {
                self.emit_page_event(PageEvent::NavExpanded);
                true
            }
            None => false,
        }
    }
}
