use eframe::App;
use egui::CentralPanel;
use egui_extras::{Size, StripBuilder};

use crate::config::DashboardConfig;
use crate::constants::layout::{CONTROLS_HEIGHT, STATUS_BAR_HEIGHT};
use crate::error::Result;
use crate::state::AppState;
use crate::ui::{self, EguiSurface};

pub struct PlotGridApp {
    pub state: AppState,

    /// Snapshot of what the plot area displays
    pub surface: EguiSurface,
}

impl PlotGridApp {
    pub fn new(config: DashboardConfig) -> Self {
        let mut app = Self {
            state: AppState::from_config(&config),
            surface: EguiSurface::default(),
        };

        if let Some(root) = config.root_path {
            match app.state.dashboard.set_root_path(root) {
                Ok(count) => app.state.ui.set_info(format!("{} CSV files found", count)),
                Err(e) => app.state.ui.report(&e),
            }
        }
        app
    }

    pub fn save_config(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(crate::constants::config::CONFIG_FILE)
            .save_file()
        else {
            return;
        };

        match self.state.to_config().save(&path) {
            Ok(()) => self.state.ui.set_info(format!("Config saved to {}", path.display())),
            Err(e) => self.state.ui.report(&e),
        }
    }

    pub fn load_config(&mut self) {
        let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file() else {
            return;
        };

        let result = DashboardConfig::load(&path).and_then(|config| self.apply_config(config));
        match result {
            Ok(()) => self.state.ui.set_info(format!("Config loaded from {}", path.display())),
            Err(e) => self.state.ui.report(&e),
        }
    }

    /// Apply view settings from `config`; loaded plots are kept
    fn apply_config(&mut self, config: DashboardConfig) -> Result<()> {
        let view = &mut self.state.view;
        view.dark_mode = config.dark_mode;
        view.plot_width = config.plot_width;
        view.plot_height = config.plot_height;

        let manager = self.state.dashboard.manager_mut();
        manager.set_legend_policy(config.legend_policy);
        manager.set_convention(config.convention());
        manager.set_max_per_row(config.max_per_row);

        if let Some(root) = config.root_path {
            self.state.ui.root_path_input = root.display().to_string();
            self.state.dashboard.set_root_path(root)?;
        }
        self.state.dashboard.resync(&mut self.surface)
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Typing into a text field must not toggle anything
        if ctx.wants_keyboard_input() {
            return;
        }
        let view = &mut self.state.view;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::T) {
                view.toggle_dark_mode();
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                view.show_help = !view.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                view.show_help = false;
            }
        });
    }
}

impl App for PlotGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_shortcuts(ctx);

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::exact(CONTROLS_HEIGHT))
                .size(Size::remainder())
                .size(Size::exact(STATUS_BAR_HEIGHT))
                .vertical(|mut strip| {
                    strip.cell(|ui| {
                        ui::render_toolbar(self, ui);
                        ui.separator();
                    });
                    strip.cell(|ui| {
                        ui::render_plot_grid(self, ui);
                    });
                    strip.cell(|ui| {
                        ui.separator();
                        ui::render_status_bar(self, ui);
                    });
                });
        });

        ui::render_help_dialog(self, ctx);
    }
}
