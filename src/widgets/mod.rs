//! Reusable UI widgets for plot-grid

mod series_checkboxes;

pub use series_checkboxes::{CheckboxChange, SeriesCheckboxes};
