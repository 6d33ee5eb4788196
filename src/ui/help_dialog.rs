use crate::app::PlotGridApp;

pub fn render_help_dialog(app: &mut PlotGridApp, ctx: &egui::Context) {
    if !app.state.view.show_help {
        return;
    }

    egui::Window::new("⌨ Help")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .show(ctx, |ui| {
            ui.heading("Keyboard");
            ui.label("T - Toggle dark/light theme");
            ui.label("H / F1 - Toggle help");
            ui.label("ESC - Close help");

            ui.separator();
            ui.heading("Loading");
            ui.label("root path + Enter - Scan a folder for CSV files");
            ui.label("Load - Add the selected file as a new plot");
            ui.label("All Load - Add every file in the list");
            ui.label("file path + Enter - Load one file directly");
            ui.label("Columns whose name contains 'y=' are plotted against 'x'");

            ui.separator();
            ui.heading("Removing");
            ui.label("Remove - Drop the selected plot; later plots move up");
            ui.label("All Remove - Clear the grid");

            ui.separator();
            ui.heading("Series");
            ui.label("Checkbox plots - Tick series on or off beside the plot");
            ui.label("Legend plots - Click a legend entry to hide it");
            ui.label("Scroll / Drag - Zoom and pan a plot");
            ui.label("Double-click - Reset a plot's view");

            ui.separator();
            if ui.button("Close").clicked() {
                app.state.view.show_help = false;
            }
        });
}
