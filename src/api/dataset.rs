use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{CsvTable, Scatter3dSeries, parse_csv};
use crate::error::SplashResult;
use crate::render::Renderer;

use super::chart_view::ChartView;

/// Fixed remote source for the demo dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/philliphuang/cs109-proj/master/data/pca/food_by_country.csv";

/// CSV column names mapped into the scatter series. Matching is exact and
/// case-sensitive: `Country` and `country` are different columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub x: String,
    pub y: String,
    pub z: String,
    pub label: String,
}

impl ColumnMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x(mut self, name: impl Into<String>) -> Self {
        self.x = name.into();
        self
    }

    #[must_use]
    pub fn with_y(mut self, name: impl Into<String>) -> Self {
        self.y = name.into();
        self
    }

    #[must_use]
    pub fn with_z(mut self, name: impl Into<String>) -> Self {
        self.z = name.into();
        self
    }

    #[must_use]
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.label = name.into();
        self
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            x: "x".to_owned(),
            y: "y".to_owned(),
            z: "z".to_owned(),
            label: "Country".to_owned(),
        }
    }
}

/// Extracts the mapped columns from `table` into a scatter series, keeping
/// row order.
pub fn series_from_csv(table: &CsvTable, mapping: &ColumnMapping) -> SplashResult<Scatter3dSeries> {
    let xs = table.numeric_column(&mapping.x)?;
    let ys = table.numeric_column(&mapping.y)?;
    let zs = table.numeric_column(&mapping.z)?;
    let labels = table
        .column(&mapping.label)?
        .into_iter()
        .map(str::to_owned)
        .collect();
    Scatter3dSeries::new(xs, ys, zs, labels)
}

impl<R: Renderer> ChartView<R> {
    /// Parses CSV text and installs the mapped series.
    pub fn load_csv_text(&mut self, csv_text: &str, mapping: &ColumnMapping) -> SplashResult<()> {
        let table = parse_csv(csv_text)?;
        let series = series_from_csv(&table, mapping)?;
        debug!(
            rows = series.len(),
            columns = table.column_count(),
            "csv dataset loaded"
        );
        self.set_series(series);
        Ok(())
    }

    /// Degrading loader: a bad dataset is logged and reported as `false`,
    /// never raised, so the chart stays absent while the page keeps working.
    pub fn load_csv_text_or_skip(&mut self, csv_text: &str, mapping: &ColumnMapping) -> bool {
        match self.load_csv_text(csv_text, mapping) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "csv dataset rejected, chart stays empty");
                false
            }
        }
    }

    /// Fetches CSV text over HTTP and installs the mapped series.
    #[cfg(feature = "remote-data")]
    pub fn load_remote_csv(&mut self, url: &str, mapping: &ColumnMapping) -> SplashResult<()> {
        let fetched = crate::fetch::fetch_csv_text(url)?;
        self.load_csv_text(&fetched.body, mapping)?;
        self.set_loaded_at(fetched.fetched_at);
        Ok(())
    }
}
