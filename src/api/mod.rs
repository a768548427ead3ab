//! Public facades: the page engine for scroll/reveal behavior and the chart
//! view for the 3D scatter render, plus their configuration types.

mod chart_view;
mod dataset;
mod engine_config;
mod observer_dispatch;
mod observer_registry;
mod page_engine;
mod reveal_timeline;
mod scatter_style;
mod validation;

pub use chart_view::{ChartLayout, ChartView, ChartViewConfig};
pub use dataset::{ColumnMapping, DEFAULT_DATASET_URL, series_from_csv};
pub use engine_config::PageEngineConfig;
pub use page_engine::{AnchorClickOutcome, PageEngine};
pub use reveal_timeline::{RevealTimeline, RevealTransition};
pub use scatter_style::{DEFAULT_MARKER_OPACITY, DEFAULT_MARKER_SIZE_PX, LabelStyle, MarkerStyle};
