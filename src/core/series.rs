use crate::error::{SplashError, SplashResult};

/// One 3D scatter series as parallel column sequences.
///
/// `xs`, `ys`, `zs`, and `labels` share one length and one row order; the
/// constructor rejects ragged or non-finite input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scatter3dSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    labels: Vec<String>,
}

impl Scatter3dSeries {
    pub fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        zs: Vec<f64>,
        labels: Vec<String>,
    ) -> SplashResult<Self> {
        let len = xs.len();
        for (name, actual) in [
            ("ys", ys.len()),
            ("zs", zs.len()),
            ("labels", labels.len()),
        ] {
            if actual != len {
                return Err(SplashError::InvalidData(format!(
                    "scatter columns must have equal length: xs={len}, {name}={actual}"
                )));
            }
        }

        for (name, values) in [("xs", &xs), ("ys", &ys), ("zs", &zs)] {
            if let Some(position) = values.iter().position(|value| !value.is_finite()) {
                return Err(SplashError::InvalidData(format!(
                    "scatter column `{name}` row {}: value must be finite",
                    position + 1
                )));
            }
        }

        Ok(Self { xs, ys, zs, labels })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn zs(&self) -> &[f64] {
        &self.zs
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}
