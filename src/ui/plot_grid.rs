use egui::{Color32, RichText};
use egui_plot::{Corner, Legend, Line, Plot};

use crate::app::PlotGridApp;
use crate::constants::layout::STANDARD_PADDING;
use crate::data::SeriesColor;
use crate::plot::{LegendPolicy, LegendUpdate, PlotEntity, Slot};
use crate::state::ViewState;
use crate::widgets::{CheckboxChange, SeriesCheckboxes};

/// Render the displayed grid of plots, row by row
pub fn render_plot_grid(app: &mut PlotGridApp, ui: &mut egui::Ui) {
    profiling::scope!("render_plot_grid");

    let rows = app.surface.rows().to_vec();
    if rows.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(STANDARD_PADDING * 4.0);
            ui.heading("No plots loaded");
            ui.label("Enter a root path, pick a CSV file and press Load");
        });
        return;
    }

    let mut pending: Option<(Slot, CheckboxChange)> = None;

    egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
        for row in &rows {
            ui.horizontal_top(|ui| {
                for &slot in row {
                    let Some(entity) = app.state.dashboard.manager().get(slot) else {
                        continue;
                    };
                    let legend = app
                        .surface
                        .legend(slot)
                        .cloned()
                        .unwrap_or_else(|| app.state.dashboard.legend_controller().legend_for(entity));

                    if let Some(change) = render_plot_card(ui, entity, &legend, &app.state.view) {
                        pending = Some((slot, change));
                    }
                    ui.add_space(STANDARD_PADDING);
                }
            });
            ui.add_space(STANDARD_PADDING);
        }
    });

    let Some((slot, change)) = pending else {
        return;
    };
    let dashboard = &mut app.state.dashboard;
    let result = match change {
        CheckboxChange::Toggled(index) => dashboard.toggle_series(slot, index, &mut app.surface),
        CheckboxChange::Active(active) => dashboard.set_series_active(slot, &active, &mut app.surface),
    };
    if let Err(e) = result {
        app.state.ui.report(&e);
    }
}

/// Draw one plot with its title and legend
///
/// Under the checkbox policy the legend is a static row of the active series
/// and the checkboxes sit beside the plot. Under the click policy the plot
/// widget's own legend hides series. Returns a checkbox change, if any.
fn render_plot_card(
    ui: &mut egui::Ui,
    entity: &PlotEntity,
    legend: &LegendUpdate,
    view: &ViewState,
) -> Option<CheckboxChange> {
    profiling::scope!("render_plot_card");

    let policy = entity.legend_policy();

    ui.vertical(|ui| {
        ui.label(RichText::new(entity.display_title()).strong());

        if !policy.uses_plot_legend() {
            render_static_legend(ui, legend);
        }

        ui.horizontal_top(|ui| {
            let bounds = entity.bounds();
            let mut plot = Plot::new(("plot", entity.id().0))
                .width(view.plot_width)
                .height(view.plot_height)
                .include_x(bounds.x_min)
                .include_x(bounds.x_max)
                .include_y(bounds.y_min)
                .include_y(bounds.y_max)
                .label_formatter(|name, value| {
                    if name.is_empty() {
                        format!("x: {:.3}\ny: {:.3}", value.x, value.y)
                    } else {
                        format!("{}\nx: {:.3}\ny: {:.3}", name, value.x, value.y)
                    }
                });
            if policy.uses_plot_legend() {
                plot = plot.legend(Legend::default().position(Corner::LeftTop));
            }

            plot.show(ui, |plot_ui| {
                for (index, series) in entity.series().iter().enumerate() {
                    if !legend.mask.get(index).copied().unwrap_or(true) {
                        continue;
                    }
                    plot_ui.line(Line::new(series.label.as_str(), series.points()).color(color32(series.color)));
                }
            });

            match policy {
                LegendPolicy::Checkbox => SeriesCheckboxes::new(entity.series(), &legend.mask).show(ui),
                LegendPolicy::Click => None,
            }
        })
        .inner
    })
    .inner
}

/// Non-interactive legend listing the active series in order
fn render_static_legend(ui: &mut egui::Ui, legend: &LegendUpdate) {
    ui.horizontal_wrapped(|ui| {
        for item in &legend.items {
            ui.label(RichText::new(format!("━ {}", item.label)).color(color32(item.color)));
        }
    });
}

fn color32(color: SeriesColor) -> Color32 {
    let [r, g, b] = color.0;
    Color32::from_rgb(r, g, b)
}
