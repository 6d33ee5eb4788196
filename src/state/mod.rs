//! Application state management
//!
//! The dashboard (plots plus the widget state driving them) is kept apart
//! from purely visual settings and transient UI state.

mod dashboard;
mod ui;
mod view;

pub use dashboard::Dashboard;
pub use ui::UiState;
pub use view::ViewState;

use crate::config::DashboardConfig;
use crate::data::FileTableSource;
use crate::plot::PlotCollectionManager;

/// Main application state container
pub struct AppState {
    /// Plots and the load/remove widget state
    pub dashboard: Dashboard<FileTableSource>,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,
}

impl AppState {
    /// Build the initial state from a validated config
    pub fn from_config(config: &DashboardConfig) -> Self {
        let manager = PlotCollectionManager::new(
            config.max_per_row,
            config.convention(),
            config.legend_policy,
        );
        Self {
            dashboard: Dashboard::new(FileTableSource::new(), manager),
            view: ViewState::from_config(config),
            ui: UiState::from_config(config),
        }
    }

    /// Current settings, as written by Save Config
    pub fn to_config(&self) -> DashboardConfig {
        let manager = self.dashboard.manager();
        DashboardConfig {
            root_path: self.dashboard.root_path().map(|p| p.to_path_buf()),
            max_per_row: manager.grid().max_per_row(),
            plot_width: self.view.plot_width,
            plot_height: self.view.plot_height,
            legend_policy: manager.legend_policy(),
            x_column: manager.convention().x_column.clone(),
            y_marker: manager.convention().y_marker.clone(),
            dark_mode: self.view.dark_mode,
        }
    }

    /// Check if any plot is loaded
    pub fn has_plots(&self) -> bool {
        !self.dashboard.manager().is_empty()
    }
}
