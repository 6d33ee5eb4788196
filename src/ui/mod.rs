mod help_dialog;
mod plot_grid;
mod surface;
mod toolbar;

pub use help_dialog::render_help_dialog;
pub use plot_grid::render_plot_grid;
pub use surface::EguiSurface;
pub use toolbar::{render_status_bar, render_toolbar};
