//! View and visualization state

use crate::config::DashboardConfig;

/// View state manages display options that do not affect the plot collection
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Width of each plot card
    pub plot_width: f32,

    /// Height of each plot card
    pub plot_height: f32,

    /// Show help panel
    pub show_help: bool,
}

impl ViewState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            dark_mode: config.dark_mode,
            plot_width: config.plot_width,
            plot_height: config.plot_height,
            show_help: false,
        }
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
