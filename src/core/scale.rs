use crate::error::{SplashError, SplashResult};

/// Maps a finite, non-degenerate data domain onto the unit interval.
///
/// Axis normalization for the scatter projection: each axis gets one scale
/// built from its min/max, and projected coordinates are composed from the
/// normalized values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> SplashResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(SplashError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_unit(self, value: f64) -> SplashResult<f64> {
        if !value.is_finite() {
            return Err(SplashError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    pub fn unit_to_domain(self, normalized: f64) -> SplashResult<f64> {
        if !normalized.is_finite() {
            return Err(SplashError::InvalidData(
                "normalized value must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + normalized * span)
    }
}
