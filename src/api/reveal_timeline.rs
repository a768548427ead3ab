use smallvec::SmallVec;

use crate::core::{RevealSequence, RevealTarget};
use crate::error::{SplashError, SplashResult};

/// Fade boundary crossed while advancing the timeline clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    FadeStarted(RevealTarget),
    FadeCompleted(RevealTarget),
}

/// Virtual-clock scheduler for the reveal choreography.
///
/// Until [`begin`](Self::begin) every target reads as fully visible and the
/// clock does not run. `begin` hides all sequence targets at once and zeroes
/// the clock; [`advance`](Self::advance) then moves time forward and reports
/// which fades started or finished during that slice. Calling `begin` again
/// restarts the choreography from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTimeline {
    sequence: RevealSequence,
    clock_ms: f64,
    begun: bool,
}

impl RevealTimeline {
    pub fn new(sequence: RevealSequence) -> SplashResult<Self> {
        sequence.validate()?;
        Ok(Self {
            sequence,
            clock_ms: 0.0,
            begun: false,
        })
    }

    #[must_use]
    pub fn sequence(&self) -> &RevealSequence {
        &self.sequence
    }

    #[must_use]
    pub fn has_begun(&self) -> bool {
        self.begun
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Hides every sequence target and resets the clock to zero.
    pub fn begin(&mut self) {
        self.begun = true;
        self.clock_ms = 0.0;
    }

    /// Advances the clock by `delta_ms` and reports crossings in step order.
    ///
    /// A fade start is reported when the clock passes the step delay; a fade
    /// completion when it reaches the step end. Before `begin` this is a
    /// no-op returning no transitions.
    pub fn advance(&mut self, delta_ms: f64) -> SplashResult<SmallVec<[RevealTransition; 8]>> {
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return Err(SplashError::InvalidData(format!(
                "advance delta must be finite and positive, got {delta_ms}"
            )));
        }

        let mut transitions = SmallVec::new();
        if !self.begun {
            return Ok(transitions);
        }

        let previous = self.clock_ms;
        self.clock_ms += delta_ms;
        for step in self.sequence.steps() {
            if previous <= step.delay_ms && self.clock_ms > step.delay_ms {
                transitions.push(RevealTransition::FadeStarted(step.target));
            }
            let end = step.end_ms();
            if previous < end && self.clock_ms >= end {
                transitions.push(RevealTransition::FadeCompleted(step.target));
            }
        }
        Ok(transitions)
    }

    /// Opacity of `target` at the current clock.
    ///
    /// Targets outside the sequence are never hidden and read as 1.0, as does
    /// everything before `begin`. While a fade runs the sequence easing maps
    /// elapsed fade time to opacity.
    #[must_use]
    pub fn opacity_of(&self, target: RevealTarget) -> f64 {
        if !self.begun {
            return 1.0;
        }
        let Some(step) = self.sequence.step_for(target) else {
            return 1.0;
        };
        let elapsed = self.clock_ms - step.delay_ms;
        if elapsed <= 0.0 {
            0.0
        } else if elapsed >= step.fade_ms {
            1.0
        } else {
            self.sequence.fade_easing().eval(elapsed / step.fade_ms)
        }
    }

    #[must_use]
    pub fn is_visible(&self, target: RevealTarget) -> bool {
        self.opacity_of(target) > 0.0
    }

    /// True once every fade in the sequence has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.begun && self.clock_ms >= self.sequence.total_duration_ms()
    }
}
