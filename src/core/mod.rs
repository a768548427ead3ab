pub mod csv;
pub mod easing;
pub mod page;
pub mod projection;
pub mod reveal;
pub mod scale;
pub mod series;
pub mod types;

pub use csv::{CsvTable, parse_csv};
pub use easing::Easing;
pub use page::{PageAnchor, PageModel};
pub use projection::{PlotArea, ProjectedMarker, project_scatter};
pub use reveal::{RevealSequence, RevealStep, RevealTarget};
pub use scale::LinearScale;
pub use series::Scatter3dSeries;
pub use types::Viewport;
