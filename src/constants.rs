//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Grid layout defaults
pub mod grid {
    /// Plots per row before the grid wraps
    pub const DEFAULT_MAX_PER_ROW: usize = 4;
}

/// Series extraction defaults
pub mod series {
    /// Column holding the shared x values
    pub const DEFAULT_X_COLUMN: &str = "x";

    /// Substring that marks a column as a y series
    pub const DEFAULT_Y_MARKER: &str = "y=";

    /// Display margin added on each side of the data range
    pub const AXIS_PADDING: f64 = 1.0;

    /// Spectral palette (4 classes), cycled when a plot has more series
    pub const PALETTE: [[u8; 3]; 4] = [
        [0x2b, 0x83, 0xba], // Blue
        [0xab, 0xdd, 0xa4], // Green
        [0xfd, 0xae, 0x61], // Orange
        [0xd7, 0x19, 0x1c], // Red
    ];
}

/// Table loading defaults
pub mod table {
    /// Rows sampled when inferring the CSV schema
    pub const INFER_SCHEMA_ROWS: usize = 100;

    /// File extension picked up by the directory scan
    pub const CSV_EXTENSION: &str = "csv";
}

/// UI layout defaults
pub mod layout {
    /// Default plot width in points
    pub const DEFAULT_PLOT_WIDTH: f32 = 250.0;

    /// Default plot height in points
    pub const DEFAULT_PLOT_HEIGHT: f32 = 250.0;

    /// Height reserved for the control strip
    pub const CONTROLS_HEIGHT: f32 = 96.0;

    /// Height of the status bar
    pub const STATUS_BAR_HEIGHT: f32 = 20.0;

    /// Width of the select lists in the control strip
    pub const SELECT_WIDTH: f32 = 320.0;

    /// Width of the action buttons
    pub const BUTTON_WIDTH: f32 = 100.0;

    /// Spacing between plot cards
    pub const STANDARD_PADDING: f32 = 10.0;
}

/// Profiling defaults
pub mod profiler {
    /// Address the puffin server binds to when the feature is enabled
    pub const PUFFIN_ADDR: &str = "127.0.0.1:8585";
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "plot-grid.json";
}
