// Library interface for launchboard
// This allows integration tests and benchmarks to access internal modules

pub mod charts;
pub mod dataset;
pub mod errors;
pub mod ui;

// Re-export commonly used types
pub use charts::{PieChart, PieSlice, ScatterChart, ScatterSeries, SiteSelection};
pub use dataset::{LaunchDataset, LaunchRecord};
pub use errors::LaunchboardError;
