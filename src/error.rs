//! Error types for plot-grid
//!
//! Every fallible operation in the dashboard returns [`PlotError`]. Handlers
//! turn these into a status-bar message via [`PlotError::user_message`].

use std::path::PathBuf;

use thiserror::Error;

use crate::plot::Slot;

/// Main error type for plot-grid operations
#[derive(Error, Debug)]
pub enum PlotError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Load target does not resolve to a readable file
    #[error("No table found at {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Column not found in data
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Table has no column carrying the y marker
    #[error("No column in '{source_label}' matches the y marker '{marker}'")]
    NoQualifyingSeries { source_label: String, marker: String },

    /// Columns of a table disagree on their length
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    TableShape {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Slot is not live in the collection
    #[error("No plot at slot {0}")]
    UnknownSlot(Slot),

    /// Series index outside the entity's series list
    #[error("Series index {index} out of range (series: {len})")]
    SeriesIndexOutOfRange { index: usize, len: usize },

    /// Checkbox visibility requested on a click-policy plot
    #[error("Plot at slot {0} hides series through legend clicks")]
    LegendPolicyMismatch(Slot),

    /// Rendering surface could not apply an update
    #[error("Rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for plot-grid operations
pub type Result<T> = std::result::Result<T, PlotError>;

/// UI-friendly error message formatting
impl PlotError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            PlotError::FileIo(e) => format!("File error: {}", e),
            PlotError::Polars(e) => format!("Data error: {}", e),
            PlotError::SourceNotFound { path } => {
                format!("File not found: {}", path.display())
            }
            PlotError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            PlotError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            PlotError::NoQualifyingSeries {
                source_label,
                marker,
            } => {
                format!("{} has no '{}' columns to plot", source_label, marker)
            }
            PlotError::TableShape {
                column,
                expected,
                actual,
            } => {
                format!(
                    "Column '{}' has {} rows but the table has {}",
                    column, actual, expected
                )
            }
            PlotError::UnknownSlot(slot) => format!("Plot {} no longer exists", slot),
            PlotError::SeriesIndexOutOfRange { index, len } => {
                format!("Series {} out of range (plot has {})", index, len)
            }
            PlotError::LegendPolicyMismatch(slot) => {
                format!("Plot {} toggles series from its legend", slot)
            }
            PlotError::SurfaceUnavailable(msg) => format!("Display error: {}", msg),
            PlotError::Config(msg) => format!("Config error: {}", msg),
            PlotError::Json(e) => format!("JSON error: {}", e),
        }
    }

    /// Get a short title for the error (for the status bar)
    pub fn title(&self) -> &'static str {
        match self {
            PlotError::FileIo(_) => "File Error",
            PlotError::Polars(_) => "Data Error",
            PlotError::SourceNotFound { .. } => "File Not Found",
            PlotError::UnsupportedFormat { .. } => "Unsupported Format",
            PlotError::ColumnNotFound { .. } => "Column Not Found",
            PlotError::NoQualifyingSeries { .. } => "No Series",
            PlotError::TableShape { .. } => "Malformed Table",
            PlotError::UnknownSlot(_) => "Unknown Plot",
            PlotError::SeriesIndexOutOfRange { .. } => "Invalid Series",
            PlotError::LegendPolicyMismatch(_) => "Legend Policy",
            PlotError::SurfaceUnavailable(_) => "Display Error",
            PlotError::Config(_) => "Configuration Error",
            PlotError::Json(_) => "JSON Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlotError::ColumnNotFound {
            column: "x".to_string(),
        };
        assert_eq!(err.user_message(), "Column 'x' not found");
        assert_eq!(err.title(), "Column Not Found");

        let err = PlotError::NoQualifyingSeries {
            source_label: "run.csv".to_string(),
            marker: "y=".to_string(),
        };
        assert_eq!(err.user_message(), "run.csv has no 'y=' columns to plot");
        assert_eq!(err.title(), "No Series");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let plot_err: PlotError = io_err.into();
        assert!(matches!(plot_err, PlotError::FileIo(_)));
    }
}
