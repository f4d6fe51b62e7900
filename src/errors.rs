// Error types for launchboard

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum LaunchboardError {
    // Errors for the dataset loader
    #[snafu(display("Invalid launch records file: {path}"))]
    InvalidDatasetFile { path: String },
    #[snafu(display("Error reading launch records file"))]
    DatasetIOError { source: io::Error },
    #[snafu(display("Error parsing launch records file"))]
    DatasetParseError { source: csv::Error },
    #[snafu(display("Launch records file contains no rows: {path}"))]
    EmptyDataset { path: String },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
}
