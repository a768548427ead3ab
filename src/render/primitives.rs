use serde::{Deserialize, Serialize};

use crate::error::{SplashError, SplashResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// 8-bit channel convenience, e.g. `Color::rgba8(217, 217, 217, 0.14)`.
    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> SplashResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SplashError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one circular marker in pixel space.
///
/// `size_px` is the marker diameter. `fill_color.alpha` already carries the
/// series opacity; outline and fill alphas are independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
    pub fill_color: Color,
    pub outline_color: Color,
    pub outline_width_px: f64,
}

impl MarkerPrimitive {
    #[must_use]
    pub const fn new(
        x: f64,
        y: f64,
        size_px: f64,
        fill_color: Color,
        outline_color: Color,
        outline_width_px: f64,
    ) -> Self {
        Self {
            x,
            y,
            size_px,
            fill_color,
            outline_color,
            outline_width_px,
        }
    }

    pub fn validate(self) -> SplashResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(SplashError::InvalidData(
                "marker coordinates must be finite".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(SplashError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        if !self.outline_width_px.is_finite() || self.outline_width_px < 0.0 {
            return Err(SplashError::InvalidData(
                "marker outline width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.outline_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> SplashResult<()> {
        if self.text.is_empty() {
            return Err(SplashError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(SplashError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(SplashError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
