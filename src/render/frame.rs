use crate::core::Viewport;
use crate::error::{SplashError, SplashResult};
use crate::render::{MarkerPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Markers are stored in paint order (far to near); labels are drawn after
/// all markers so text stays legible.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            markers: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> SplashResult<()> {
        if !self.viewport.is_valid() {
            return Err(SplashError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.texts.is_empty()
    }
}
