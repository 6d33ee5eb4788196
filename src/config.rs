//! Dashboard configuration
//!
//! Read from `plot-grid.json` at startup and saved/loaded on demand from the
//! toolbar. Only view settings live here, never the loaded plots.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::grid::DEFAULT_MAX_PER_ROW;
use crate::constants::layout::{DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH};
use crate::constants::series::{DEFAULT_X_COLUMN, DEFAULT_Y_MARKER};
use crate::data::SeriesConvention;
use crate::error::{PlotError, Result};
use crate::plot::LegendPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory scanned for CSV files at startup
    pub root_path: Option<PathBuf>,
    /// Plots per grid row
    pub max_per_row: usize,
    pub plot_width: f32,
    pub plot_height: f32,
    /// Policy given to newly loaded plots
    pub legend_policy: LegendPolicy,
    pub x_column: String,
    pub y_marker: String,
    pub dark_mode: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            max_per_row: DEFAULT_MAX_PER_ROW,
            plot_width: DEFAULT_PLOT_WIDTH,
            plot_height: DEFAULT_PLOT_HEIGHT,
            legend_policy: LegendPolicy::default(),
            x_column: DEFAULT_X_COLUMN.to_string(),
            y_marker: DEFAULT_Y_MARKER.to_string(),
            dark_mode: true,
        }
    }
}

impl DashboardConfig {
    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Config from `path`, or defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_per_row == 0 {
            return Err(PlotError::Config("max_per_row must be at least 1".into()));
        }
        if self.x_column.is_empty() {
            return Err(PlotError::Config("x_column must not be empty".into()));
        }
        if self.y_marker.is_empty() {
            return Err(PlotError::Config("y_marker must not be empty".into()));
        }
        if !(self.plot_width > 0.0 && self.plot_height > 0.0) {
            return Err(PlotError::Config(format!(
                "plot size must be positive, got {}x{}",
                self.plot_width, self.plot_height
            )));
        }
        Ok(())
    }

    pub fn convention(&self) -> SeriesConvention {
        SeriesConvention {
            x_column: self.x_column.clone(),
            y_marker: self.y_marker.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot-grid.json");
        let config = DashboardConfig {
            root_path: Some(PathBuf::from("/data/runs")),
            max_per_row: 1,
            legend_policy: LegendPolicy::Click,
            ..DashboardConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(DashboardConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "max_per_row": 2, "legend_policy": "click" }"#).unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.max_per_row, 2);
        assert_eq!(config.legend_policy, LegendPolicy::Click);
        assert_eq!(config.y_marker, "y=");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = DashboardConfig {
            max_per_row: 0,
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(PlotError::Config(_))));

        let config = DashboardConfig {
            plot_height: 0.0,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(DashboardConfig::load_or_default(&path), DashboardConfig::default());
        assert_eq!(
            DashboardConfig::load_or_default(&dir.path().join("missing.json")),
            DashboardConfig::default()
        );
    }
}
