use std::path::PathBuf;

use egui::{Button, Color32, ComboBox, Key};

use crate::app::PlotGridApp;
use crate::constants::layout::{BUTTON_WIDTH, SELECT_WIDTH};
use crate::plot::LegendPolicy;

const SUCCESS: Color32 = Color32::from_rgb(40, 130, 70);
const WARNING: Color32 = Color32::from_rgb(200, 120, 20);
const BUTTON_HEIGHT: f32 = 20.0;

/// Render the control strip: root path, file list, plot list and actions
pub fn render_toolbar(app: &mut PlotGridApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            render_path_inputs(app, ui);
            render_load_row(app, ui);
            render_remove_row(app, ui);
        });

        ui.separator();

        ui.vertical(|ui| {
            if action_button(ui, "All Load", SUCCESS).clicked() {
                load_all(app);
            }
            let has_plots = app.state.has_plots();
            ui.add_enabled_ui(has_plots, |ui| {
                if action_button(ui, "All Remove", WARNING).clicked() {
                    remove_all(app);
                }
            });
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if ui.button("⚙").on_hover_text("Save Config").clicked() {
                    app.save_config();
                }
                if ui.button("📥").on_hover_text("Load Config").clicked() {
                    app.load_config();
                }
                let theme = if app.state.view.dark_mode { "🌙" } else { "☀" };
                if ui.button(theme).on_hover_text("Toggle theme (T)").clicked() {
                    app.state.view.toggle_dark_mode();
                }
                if ui.button("❓").on_hover_text("Help (F1)").clicked() {
                    app.state.view.show_help = !app.state.view.show_help;
                }
            });

            ui.label("New plots hide series by:");
            let manager = app.state.dashboard.manager_mut();
            let mut policy = manager.legend_policy();
            ui.horizontal(|ui| {
                ui.radio_value(&mut policy, LegendPolicy::Checkbox, "Checkbox");
                ui.radio_value(&mut policy, LegendPolicy::Click, "Legend click");
            });
            manager.set_legend_policy(policy);
        });
    });
}

fn render_path_inputs(app: &mut PlotGridApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("root path:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.state.ui.root_path_input).desired_width(SELECT_WIDTH),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            apply_root_path(app);
        }
        if ui.button("📂").on_hover_text("Browse for a root folder").clicked() {
            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                app.state.ui.root_path_input = dir.display().to_string();
                apply_root_path(app);
            }
        }

        ui.separator();

        ui.label("file path(*.csv):");
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.state.ui.file_path_input).desired_width(SELECT_WIDTH),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            let path = PathBuf::from(app.state.ui.file_path_input.trim());
            match app.state.dashboard.load_path(&path, &mut app.surface) {
                Ok(Some(slot)) => app.state.ui.set_info(format!("Loaded plot {}", slot)),
                Ok(None) => {}
                Err(e) => app.state.ui.report(&e),
            }
        }
    });
}

fn render_load_row(app: &mut PlotGridApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let options = app.state.dashboard.file_options().to_vec();
        let selected = app
            .state
            .dashboard
            .load_target()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        ComboBox::from_id_salt("file_list")
            .width(SELECT_WIDTH)
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for path in &options {
                    let label = path.display().to_string();
                    if ui.selectable_label(label == selected, label.as_str()).clicked() {
                        app.state.dashboard.set_load_target(path.clone());
                    }
                }
            });

        if action_button(ui, "Load", SUCCESS).clicked() {
            match app.state.dashboard.load(&mut app.surface) {
                Ok(Some(slot)) => app.state.ui.set_info(format!("Loaded plot {}", slot)),
                Ok(None) => {}
                Err(e) => app.state.ui.report(&e),
            }
        }
    });
}

fn render_remove_row(app: &mut PlotGridApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let titles = app.state.dashboard.manager().titles();
        let selected = app.state.dashboard.remove_target().unwrap_or_default().to_string();

        ComboBox::from_id_salt("plot_list")
            .width(SELECT_WIDTH)
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for title in &titles {
                    if ui.selectable_label(*title == selected, title.as_str()).clicked() {
                        app.state.dashboard.set_remove_target(title.clone());
                    }
                }
            });

        if action_button(ui, "Remove", WARNING).clicked() {
            match app.state.dashboard.remove(&mut app.surface) {
                Ok(Some(removed)) => {
                    app.state.ui.set_info(format!("Removed {}", removed.source_label()))
                }
                Ok(None) => {}
                Err(e) => app.state.ui.report(&e),
            }
        }
    });
}

fn apply_root_path(app: &mut PlotGridApp) {
    let root = app.state.ui.root_path_input.trim().to_string();
    match app.state.dashboard.set_root_path(&root) {
        Ok(count) => app.state.ui.set_info(format!("{} CSV files under {}", count, root)),
        Err(e) => app.state.ui.report(&e),
    }
}

fn load_all(app: &mut PlotGridApp) {
    match app.state.dashboard.load_all(&mut app.surface) {
        Ok(report) if report.failed.is_empty() => {
            app.state.ui.set_info(format!("Loaded {} plots", report.loaded.len()));
        }
        Ok(report) => {
            let (path, first) = &report.failed[0];
            app.state.ui.set_error(format!(
                "Loaded {} plots, {} failed ({}: {})",
                report.loaded.len(),
                report.failed.len(),
                path.display(),
                first.user_message()
            ));
        }
        Err(e) => app.state.ui.report(&e),
    }
}

fn remove_all(app: &mut PlotGridApp) {
    match app.state.dashboard.remove_all(&mut app.surface) {
        Ok(count) => app.state.ui.set_info(format!("Removed {} plots", count)),
        Err(e) => app.state.ui.report(&e),
    }
}

fn action_button(ui: &mut egui::Ui, label: &str, fill: Color32) -> egui::Response {
    ui.add_sized(
        [BUTTON_WIDTH, BUTTON_HEIGHT],
        Button::new(egui::RichText::new(label).color(Color32::WHITE)).fill(fill),
    )
}

/// Render the status bar: plot count and the last message
pub fn render_status_bar(app: &mut PlotGridApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if let Some(root) = app.state.dashboard.root_path() {
            ui.label(format!("📁 {}", root.display()));
            ui.separator();
        }
        let manager = app.state.dashboard.manager();
        ui.label(format!(
            "Plots: {} | Rows: {}",
            manager.len(),
            manager.grid().rows().len()
        ));
        if app.state.ui.has_error() {
            ui.separator();
            let err = app.state.ui.error_message.as_deref().unwrap_or_default();
            ui.colored_label(Color32::from_rgb(255, 80, 80), err);
            if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                app.state.ui.clear_error();
            }
        } else if let Some(info) = &app.state.ui.info_message {
            ui.separator();
            ui.label(info);
        }
    });
}
