use crate::core::Viewport;
use crate::error::{SplashError, SplashResult};
use crate::interaction::{NavCollapseConfig, ScrollAnimationConfig};

use super::chart_view::ChartLayout;

pub(super) fn validate_nav_collapse_config(
    config: NavCollapseConfig,
) -> SplashResult<NavCollapseConfig> {
    if !config.collapse_threshold_px.is_finite() || config.collapse_threshold_px < 0.0 {
        return Err(SplashError::InvalidData(format!(
            "nav collapse threshold must be finite and >= 0, got {}",
            config.collapse_threshold_px
        )));
    }
    Ok(config)
}

pub(super) fn validate_scroll_animation_config(
    config: ScrollAnimationConfig,
) -> SplashResult<ScrollAnimationConfig> {
    if !config.duration_ms.is_finite() || config.duration_ms <= 0.0 {
        return Err(SplashError::InvalidData(format!(
            "anchor scroll duration must be finite and > 0, got {}",
            config.duration_ms
        )));
    }
    Ok(config)
}

pub(super) fn validate_advance_delta(delta_ms: f64) -> SplashResult<()> {
    if !delta_ms.is_finite() || delta_ms <= 0.0 {
        return Err(SplashError::InvalidData(format!(
            "advance delta must be finite and positive, got {delta_ms}"
        )));
    }
    Ok(())
}

pub(super) fn validate_chart_layout(
    layout: ChartLayout,
    viewport: Viewport,
) -> SplashResult<ChartLayout> {
    for (name, value) in [
        ("margin_left_px", layout.margin_left_px),
        ("margin_right_px", layout.margin_right_px),
        ("margin_top_px", layout.margin_top_px),
        ("margin_bottom_px", layout.margin_bottom_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(SplashError::InvalidData(format!(
                "layout `{name}` must be finite and >= 0"
            )));
        }
    }

    let plot_width = viewport.width_f64() - layout.margin_left_px - layout.margin_right_px;
    let plot_height = viewport.height_f64() - layout.margin_top_px - layout.margin_bottom_px;
    if plot_width <= 0.0 || plot_height <= 0.0 {
        return Err(SplashError::InvalidData(format!(
            "layout margins leave no plot area inside the {}x{} viewport",
            viewport.width, viewport.height
        )));
    }

    Ok(layout)
}
