//! Fixed-camera projection of a 3D scatter series into pixel space.
//!
//! The camera is a 30-degree axonometric view of the unit cube: each axis is
//! normalized to [0, 1] from its own data range, then composed into screen
//! coordinates. Output is sorted far-to-near for painter-order drawing.

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use ordered_float::OrderedFloat;

use crate::core::scale::LinearScale;
use crate::core::series::Scatter3dSeries;
use crate::error::{SplashError, SplashResult};

// cos(30°) and sin(30°) for the axonometric axes.
const ISO_COS: f64 = 0.866_025_403_784_438_6;
const ISO_SIN: f64 = 0.5;

/// Pixel rectangle the projection maps into (viewport minus margins).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left_px: f64,
    pub top_px: f64,
    pub width_px: f64,
    pub height_px: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(left_px: f64, top_px: f64, width_px: f64, height_px: f64) -> Self {
        Self {
            left_px,
            top_px,
            width_px,
            height_px,
        }
    }

    pub fn validate(self) -> SplashResult<()> {
        for (name, value) in [
            ("left_px", self.left_px),
            ("top_px", self.top_px),
            ("width_px", self.width_px),
            ("height_px", self.height_px),
        ] {
            if !value.is_finite() {
                return Err(SplashError::InvalidData(format!(
                    "plot area {name} must be finite"
                )));
            }
        }
        if self.width_px <= 0.0 || self.height_px <= 0.0 {
            return Err(SplashError::InvalidData(
                "plot area must have positive width and height".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn right_px(self) -> f64 {
        self.left_px + self.width_px
    }

    #[must_use]
    pub fn bottom_px(self) -> f64 {
        self.top_px + self.height_px
    }
}

/// One marker in pixel space, carrying its source row index and a depth key
/// (larger = nearer to the camera).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedMarker {
    pub x_px: f64,
    pub y_px: f64,
    pub depth: f64,
    pub index: usize,
}

/// Projects every series row into `plot`, sorted far-to-near.
///
/// A degenerate axis (all values equal) maps to the cube center rather than
/// failing, so single-point and flat datasets still render.
pub fn project_scatter(
    series: &Scatter3dSeries,
    plot: PlotArea,
) -> SplashResult<Vec<ProjectedMarker>> {
    plot.validate()?;

    if series.is_empty() {
        return Ok(Vec::new());
    }

    let basis = ProjectionBasis::for_series(series)?;

    // For large series, optional parallel projection keeps API behavior stable
    // while reducing wall-clock projection time.
    #[cfg(feature = "parallel-projection")]
    let mut projected = {
        let results: Vec<SplashResult<ProjectedMarker>> = (0..series.len())
            .into_par_iter()
            .map(|index| project_single_marker(series, index, basis, plot))
            .collect();
        results.into_iter().collect::<SplashResult<Vec<_>>>()?
    };

    #[cfg(not(feature = "parallel-projection"))]
    let mut projected = {
        let mut out = Vec::with_capacity(series.len());
        for index in 0..series.len() {
            out.push(project_single_marker(series, index, basis, plot)?);
        }
        out
    };

    projected.sort_by_key(|marker| OrderedFloat(marker.depth));
    Ok(projected)
}

/// Per-render scales: one normalization scale per data axis plus the fixed
/// ranges of the composed screen coordinates (u in [-cos30, cos30], v in
/// [0, 2]).
#[derive(Debug, Clone, Copy)]
struct ProjectionBasis {
    x_axis: Option<LinearScale>,
    y_axis: Option<LinearScale>,
    z_axis: Option<LinearScale>,
    u_scale: LinearScale,
    v_scale: LinearScale,
}

impl ProjectionBasis {
    fn for_series(series: &Scatter3dSeries) -> SplashResult<Self> {
        Ok(Self {
            x_axis: axis_scale(series.xs())?,
            y_axis: axis_scale(series.ys())?,
            z_axis: axis_scale(series.zs())?,
            u_scale: LinearScale::new(-ISO_COS, ISO_COS)?,
            v_scale: LinearScale::new(0.0, 2.0)?,
        })
    }
}

fn project_single_marker(
    series: &Scatter3dSeries,
    index: usize,
    basis: ProjectionBasis,
    plot: PlotArea,
) -> SplashResult<ProjectedMarker> {
    let nx = axis_unit(basis.x_axis, series.xs()[index])?;
    let ny = axis_unit(basis.y_axis, series.ys()[index])?;
    let nz = axis_unit(basis.z_axis, series.zs()[index])?;

    let u = (nx - nz) * ISO_COS;
    let v = ny + (nx + nz) * ISO_SIN;
    let depth = nx + ny + nz;

    let x_px = plot.left_px + basis.u_scale.domain_to_unit(u)? * plot.width_px;
    // Screen y grows downward; larger v means higher on screen.
    let y_px = plot.top_px + (1.0 - basis.v_scale.domain_to_unit(v)?) * plot.height_px;

    Ok(ProjectedMarker {
        x_px,
        y_px,
        depth,
        index,
    })
}

/// Scale for one axis, or `None` when every value is identical.
fn axis_scale(values: &[f64]) -> SplashResult<Option<LinearScale>> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Ok(None);
    }
    LinearScale::new(min, max).map(Some)
}

fn axis_unit(scale: Option<LinearScale>, value: f64) -> SplashResult<f64> {
    match scale {
        Some(scale) => scale.domain_to_unit(value),
        None => Ok(0.5),
    }
}
