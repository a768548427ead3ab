use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Timing curves over normalized time `t in [0, 1]`.
///
/// `Swing` is the stock fade curve; `EaseInOutExpo` drives anchor scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    Swing,
    EaseInOutExpo,
}

impl Easing {
    /// Evaluates the curve at normalized time `t`.
    ///
    /// Values outside `[0, 1]` are clamped; non-finite input evaluates to 0.
    /// Every curve maps 0 to 0 and 1 to 1 and is non-decreasing in between.
    #[must_use]
    pub fn eval(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::Linear => t,
            Self::Swing => 0.5 - (t * PI).cos() / 2.0,
            Self::EaseInOutExpo => ease_in_out_expo(t),
        }
    }
}

fn ease_in_out_expo(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // Exponential halves meet at (0.5, 0.5); the endpoint guards above keep
    // the curve exact at 0 and 1 where the raw exponential does not land.
    let s = t * 2.0;
    if s < 1.0 {
        0.5 * (10.0 * (s - 1.0)).exp2()
    } else {
        0.5 * (2.0 - (-10.0 * (s - 1.0)).exp2())
    }
}
