use serde::{Deserialize, Serialize};

use crate::core::easing::Easing;
use crate::error::{SplashError, SplashResult};

/// Delay of the first title fade, in virtual milliseconds.
pub const TITLE_FIRST_DELAY_MS: f64 = 500.0;
/// Gap between consecutive title fades.
pub const TITLE_STAGGER_MS: f64 = 400.0;
/// Fade duration of each title.
pub const TITLE_FADE_MS: f64 = 300.0;
/// Number of staggered title elements in the stock choreography.
pub const TITLE_COUNT: u8 = 5;
/// Delay of the subtitle/nav/sections wave.
pub const PAGE_REVEAL_DELAY_MS: f64 = 2500.0;
/// Fade duration of the subtitle/nav/sections wave.
pub const PAGE_REVEAL_FADE_MS: f64 = 600.0;

/// Page element (or element group) hidden at reveal begin and faded back in.
///
/// `Sections` covers every content section except the intro, which is never
/// hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealTarget {
    Nav,
    Subtitle,
    Title(u8),
    Sections,
}

/// One scheduled fade: hidden until `delay_ms`, fully visible at
/// `delay_ms + fade_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealStep {
    pub target: RevealTarget,
    pub delay_ms: f64,
    pub fade_ms: f64,
}

impl RevealStep {
    #[must_use]
    pub fn new(target: RevealTarget, delay_ms: f64, fade_ms: f64) -> Self {
        Self {
            target,
            delay_ms,
            fade_ms,
        }
    }

    #[must_use]
    pub fn end_ms(self) -> f64 {
        self.delay_ms + self.fade_ms
    }
}

/// Validated reveal choreography.
///
/// Steps are kept in declaration order; validation requires non-decreasing
/// delays so the visual order is fixed by the delays alone, and unique
/// targets so no element is scheduled twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealSequence {
    steps: Vec<RevealStep>,
    #[serde(default = "default_fade_easing")]
    fade_easing: Easing,
}

impl RevealSequence {
    pub fn new(steps: impl IntoIterator<Item = RevealStep>) -> SplashResult<Self> {
        let sequence = Self {
            steps: steps.into_iter().collect(),
            fade_easing: default_fade_easing(),
        };
        sequence.validate()?;
        Ok(sequence)
    }

    /// Empty sequence; `begin` hides nothing and completes immediately.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            steps: Vec::new(),
            fade_easing: default_fade_easing(),
        }
    }

    #[must_use]
    pub fn with_fade_easing(mut self, easing: Easing) -> Self {
        self.fade_easing = easing;
        self
    }

    pub fn validate(&self) -> SplashResult<()> {
        let mut previous_delay = f64::NEG_INFINITY;
        for (index, step) in self.steps.iter().enumerate() {
            for (name, value) in [("delay_ms", step.delay_ms), ("fade_ms", step.fade_ms)] {
                if !value.is_finite() {
                    return Err(SplashError::InvalidData(format!(
                        "reveal step {index}: {name} must be finite"
                    )));
                }
            }
            if step.delay_ms < 0.0 {
                return Err(SplashError::InvalidData(format!(
                    "reveal step {index}: delay_ms must be >= 0"
                )));
            }
            if step.fade_ms <= 0.0 {
                return Err(SplashError::InvalidData(format!(
                    "reveal step {index}: fade_ms must be > 0"
                )));
            }
            if let RevealTarget::Title(0) = step.target {
                return Err(SplashError::InvalidData(format!(
                    "reveal step {index}: title indices start at 1"
                )));
            }
            if step.delay_ms < previous_delay {
                return Err(SplashError::InvalidData(format!(
                    "reveal step {index}: delays must be non-decreasing"
                )));
            }
            previous_delay = step.delay_ms;

            let duplicates = self
                .steps
                .iter()
                .filter(|other| other.target == step.target)
                .count();
            if duplicates > 1 {
                return Err(SplashError::InvalidData(format!(
                    "reveal step {index}: duplicate target {:?}",
                    step.target
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    #[must_use]
    pub fn fade_easing(&self) -> Easing {
        self.fade_easing
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn contains(&self, target: RevealTarget) -> bool {
        self.step_for(target).is_some()
    }

    #[must_use]
    pub fn step_for(&self, target: RevealTarget) -> Option<&RevealStep> {
        self.steps.iter().find(|step| step.target == target)
    }

    /// Virtual time at which the last fade finishes; 0 for an empty sequence.
    #[must_use]
    pub fn total_duration_ms(&self) -> f64 {
        self.steps
            .iter()
            .map(|step| step.end_ms())
            .fold(0.0, f64::max)
    }
}

impl Default for RevealSequence {
    /// The stock intro: titles 1..=5 staggered from 500 by 400, fading over
    /// 300 each; subtitle, nav, and non-intro sections together at 2500,
    /// fading over 600.
    fn default() -> Self {
        let mut steps = Vec::with_capacity(usize::from(TITLE_COUNT) + 3);
        for index in 1..=TITLE_COUNT {
            steps.push(RevealStep::new(
                RevealTarget::Title(index),
                TITLE_FIRST_DELAY_MS + TITLE_STAGGER_MS * f64::from(index - 1),
                TITLE_FADE_MS,
            ));
        }
        for target in [
            RevealTarget::Subtitle,
            RevealTarget::Nav,
            RevealTarget::Sections,
        ] {
            steps.push(RevealStep::new(
                target,
                PAGE_REVEAL_DELAY_MS,
                PAGE_REVEAL_FADE_MS,
            ));
        }

        Self {
            steps,
            fade_easing: default_fade_easing(),
        }
    }
}

fn default_fade_easing() -> Easing {
    Easing::Swing
}
