use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlotArea, Scatter3dSeries, Viewport, project_scatter};
use crate::error::{SplashError, SplashResult};
use crate::render::{MarkerPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::scatter_style::{LabelStyle, MarkerStyle};
use super::validation;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Margins around the plot area. All zero by default, matching a chart that
/// fills its container edge to edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartLayout {
    pub margin_left_px: f64,
    pub margin_right_px: f64,
    pub margin_top_px: f64,
    pub margin_bottom_px: f64,
}

impl ChartLayout {
    /// Plot rectangle left inside `viewport` after margins.
    #[must_use]
    pub fn plot_area(self, viewport: Viewport) -> PlotArea {
        PlotArea::new(
            self.margin_left_px,
            self.margin_top_px,
            viewport.width_f64() - self.margin_left_px - self.margin_right_px,
            viewport.height_f64() - self.margin_top_px - self.margin_bottom_px,
        )
    }
}

/// Bootstrap configuration for [`ChartView`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub marker_style: MarkerStyle,
    #[serde(default)]
    pub label_style: LabelStyle,
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layout: ChartLayout::default(),
            marker_style: MarkerStyle::default(),
            label_style: LabelStyle::default(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = style;
        self
    }

    #[must_use]
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }
}

/// 3D scatter view over an injected renderer backend.
///
/// The view owns at most one series at a time and renders only on explicit
/// [`render`](Self::render) calls. With no series loaded a render call is a
/// logged no-op: the backend is never invoked for an empty view, so a failed
/// dataset load degrades to an absent chart rather than an error surface.
#[derive(Debug)]
pub struct ChartView<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    layout: ChartLayout,
    marker_style: MarkerStyle,
    label_style: LabelStyle,
    series: Option<Scatter3dSeries>,
    loaded_at: Option<DateTime<Utc>>,
    render_count: usize,
}

impl<R: Renderer> ChartView<R> {
    pub fn new(renderer: R, config: ChartViewConfig) -> SplashResult<Self> {
        if !config.viewport.is_valid() {
            return Err(SplashError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        let layout = validation::validate_chart_layout(config.layout, config.viewport)?;
        config.marker_style.validate()?;
        config.label_style.validate()?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            layout,
            marker_style: config.marker_style,
            label_style: config.label_style,
            series: None,
            loaded_at: None,
            render_count: 0,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn marker_style(&self) -> MarkerStyle {
        self.marker_style
    }

    #[must_use]
    pub fn label_style(&self) -> LabelStyle {
        self.label_style
    }

    #[must_use]
    pub fn series(&self) -> Option<&Scatter3dSeries> {
        self.series.as_ref()
    }

    #[must_use]
    pub fn has_series(&self) -> bool {
        self.series.is_some()
    }

    /// When the current series was installed, if any.
    #[must_use]
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// How many frames have reached the renderer.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Installs `series` as the view's dataset.
    pub fn set_series(&mut self, series: Scatter3dSeries) {
        debug!(rows = series.len(), "scatter series installed");
        self.series = Some(series);
        self.loaded_at = Some(Utc::now());
    }

    pub(super) fn set_loaded_at(&mut self, at: DateTime<Utc>) {
        self.loaded_at = Some(at);
    }

    pub fn clear_series(&mut self) {
        self.series = None;
        self.loaded_at = None;
    }

    /// Materializes the current series into a render frame.
    ///
    /// Markers land in far-to-near order; labels follow all markers so text
    /// is never occluded by a dot.
    pub fn build_render_frame(&self) -> SplashResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        let Some(series) = &self.series else {
            return Ok(frame);
        };

        let plot = self.layout.plot_area(self.viewport);
        let projected = project_scatter(series, plot)?;
        let fill = self.marker_style.effective_fill();

        for marker in &projected {
            frame.markers.push(MarkerPrimitive::new(
                marker.x_px,
                marker.y_px,
                self.marker_style.size_px,
                fill,
                self.marker_style.outline_color,
                self.marker_style.outline_width_px,
            ));
        }
        for marker in &projected {
            let Some(label) = series.label(marker.index) else {
                continue;
            };
            if label.is_empty() {
                continue;
            }
            let label_y = marker.y_px
                - self.marker_style.size_px / 2.0
                - self.label_style.offset_px
                - self.label_style.font_size_px;
            frame.texts.push(TextPrimitive::new(
                label,
                marker.x_px,
                label_y,
                self.label_style.font_size_px,
                self.label_style.color,
                TextHAlign::Center,
            ));
        }

        Ok(frame)
    }

    /// Renders the current series through the backend.
    ///
    /// Without a series this is a no-op; with one, every call produces a
    /// fresh frame, so callers decide how often the chart draws.
    pub fn render(&mut self) -> SplashResult<()> {
        if self.series.is_none() {
            debug!("no scatter series loaded, skipping render");
            return Ok(());
        }
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.render_count += 1;
        debug!(
            markers = frame.markers.len(),
            texts = frame.texts.len(),
            "scatter frame rendered"
        );
        Ok(())
    }

    /// Renders the current series into an external cairo context.
    ///
    /// This path is used by toolkit draw callbacks while keeping the
    /// renderer implementation decoupled from toolkit-specific APIs.
    /// Like [`ChartView::render`], it is a no-op without a series.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> SplashResult<()>
    where
        R: CairoContextRenderer,
    {
        if self.series.is_none() {
            debug!("no scatter series loaded, skipping render");
            return Ok(());
        }
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.render_count += 1;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the view and returns the backend, e.g. to export a surface.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
