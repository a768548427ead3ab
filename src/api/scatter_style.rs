use serde::{Deserialize, Serialize};

use crate::error::{SplashError, SplashResult};
use crate::render::Color;

/// Default marker diameter in pixels.
pub const DEFAULT_MARKER_SIZE_PX: f64 = 12.0;
/// Default marker fill opacity.
pub const DEFAULT_MARKER_OPACITY: f64 = 0.8;

/// Visual styling for scatter markers.
///
/// Defaults reproduce the stock chart look: 12 px dots at 0.8 opacity with a
/// thin translucent light-gray outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Marker diameter in pixels.
    pub size_px: f64,
    /// Fill opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    pub fill_color: Color,
    pub outline_color: Color,
    pub outline_width_px: f64,
}

impl MarkerStyle {
    pub fn validate(self) -> SplashResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(SplashError::InvalidData(format!(
                "marker size must be finite and > 0, got {}",
                self.size_px
            )));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(SplashError::InvalidData(format!(
                "marker opacity must be within [0, 1], got {}",
                self.opacity
            )));
        }
        if !self.outline_width_px.is_finite() || self.outline_width_px < 0.0 {
            return Err(SplashError::InvalidData(format!(
                "marker outline width must be finite and >= 0, got {}",
                self.outline_width_px
            )));
        }
        self.fill_color.validate()?;
        self.outline_color.validate()
    }

    /// Fill color with the marker opacity folded into its alpha channel.
    #[must_use]
    pub fn effective_fill(self) -> Color {
        self.fill_color
            .with_alpha(self.fill_color.alpha * self.opacity)
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size_px: DEFAULT_MARKER_SIZE_PX,
            opacity: DEFAULT_MARKER_OPACITY,
            fill_color: Color::rgb8(31, 119, 180),
            outline_color: Color::rgba8(217, 217, 217, 0.14),
            outline_width_px: 0.5,
        }
    }
}

/// Styling for the per-marker labels drawn above each dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub font_size_px: f64,
    pub color: Color,
    /// Gap in pixels between marker edge and label.
    pub offset_px: f64,
}

impl LabelStyle {
    pub fn validate(self) -> SplashResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(SplashError::InvalidData(format!(
                "label font size must be finite and > 0, got {}",
                self.font_size_px
            )));
        }
        if !self.offset_px.is_finite() || self.offset_px < 0.0 {
            return Err(SplashError::InvalidData(format!(
                "label offset must be finite and >= 0, got {}",
                self.offset_px
            )));
        }
        self.color.validate()
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size_px: 12.0,
            color: Color::rgb8(68, 68, 68),
            offset_px: 4.0,
        }
    }
}
