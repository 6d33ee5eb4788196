//! Checkbox group controlling which series of a plot are drawn

use egui::{Color32, RichText, Ui};

use crate::data::Series;

/// What the user changed in a [`SeriesCheckboxes`] group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckboxChange {
    /// One checkbox was clicked
    Toggled(usize),
    /// The whole active set was replaced (All / None)
    Active(Vec<usize>),
}

/// One checkbox per series, labelled with the series name
pub struct SeriesCheckboxes<'a> {
    series: &'a [Series],
    mask: &'a [bool],
}

impl<'a> SeriesCheckboxes<'a> {
    /// Create a checkbox group; `mask` holds the current visible flag per series
    pub fn new(series: &'a [Series], mask: &'a [bool]) -> Self {
        Self { series, mask }
    }

    /// Show the checkboxes; returns the change the user made this frame
    pub fn show(self, ui: &mut Ui) -> Option<CheckboxChange> {
        let mut change = None;

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if ui.small_button("All").clicked() {
                    change = Some(CheckboxChange::Active((0..self.series.len()).collect()));
                }
                if ui.small_button("None").clicked() {
                    change = Some(CheckboxChange::Active(Vec::new()));
                }
            });

            for (index, series) in self.series.iter().enumerate() {
                let mut checked = self.mask.get(index).copied().unwrap_or(false);
                let [r, g, b] = series.color.0;
                let label = RichText::new(series.label.as_str()).color(Color32::from_rgb(r, g, b));
                if ui.checkbox(&mut checked, label).changed() {
                    change = Some(CheckboxChange::Toggled(index));
                }
            }
        });

        change
    }
}
