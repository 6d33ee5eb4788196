//! UI interaction state

use crate::config::DashboardConfig;
use crate::error::PlotError;

/// Text field contents and the status line
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Root path text field
    pub root_path_input: String,

    /// Single-file path text field
    pub file_path_input: String,

    /// Error message to display in the status bar
    pub error_message: Option<String>,

    /// Informational message to display in the status bar
    pub info_message: Option<String>,
}

impl UiState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            root_path_input: config
                .root_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.info_message = None;
        self.error_message = Some(message.into());
    }

    /// Report a failed handler
    pub fn report(&mut self, err: &PlotError) {
        tracing::warn!(error = %err, "{}", err.title());
        self.set_error(format!("{}: {}", err.title(), err.user_message()));
    }

    /// Set an informational message, replacing any error
    pub fn set_info(&mut self, message: impl Into<String>) {
        self.error_message = None;
        self.info_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check if there's an error to display
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
