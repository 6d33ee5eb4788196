//! Series extraction: turns a [`Table`] into plottable series and axis bounds

use serde::{Deserialize, Serialize};

use super::table::Table;
use crate::constants::series::{AXIS_PADDING, DEFAULT_X_COLUMN, DEFAULT_Y_MARKER, PALETTE};
use crate::error::{PlotError, Result};

/// RGB color of one series line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor(pub [u8; 3]);

impl SeriesColor {
    /// Palette color for the series at `index`, cycling when the palette runs out
    pub fn for_index(index: usize) -> Self {
        SeriesColor(PALETTE[index % PALETTE.len()])
    }
}

/// One named sequence plotted against the shared x axis
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: SeriesColor,
}

impl Series {
    /// Points as `[x, y]` pairs for the plot widget
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect()
    }
}

/// Padded axis ranges of a plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Which columns feed the x axis and which become y series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConvention {
    pub x_column: String,
    /// A column is a y series when its name contains this marker
    pub y_marker: String,
}

impl Default for SeriesConvention {
    fn default() -> Self {
        Self {
            x_column: DEFAULT_X_COLUMN.to_string(),
            y_marker: DEFAULT_Y_MARKER.to_string(),
        }
    }
}

impl SeriesConvention {
    pub fn is_y_column(&self, name: &str) -> bool {
        name != self.x_column && name.contains(&self.y_marker)
    }
}

/// Result of [`extract`]
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub bounds: Bounds,
    pub series: Vec<Series>,
}

/// Derive bounds and series from a table
///
/// Series come out in column order; labels are the column names and are not
/// de-duplicated. Bounds span the x column and every y series, padded by
/// [`AXIS_PADDING`] on each side. NaN and infinite cells are ignored for bounds.
pub fn extract(table: &Table, convention: &SeriesConvention, source_label: &str) -> Result<Extraction> {
    profiling::scope!("extract_series");

    let x = table
        .column(&convention.x_column)
        .ok_or_else(|| PlotError::ColumnNotFound {
            column: convention.x_column.clone(),
        })?;

    let series: Vec<Series> = table
        .iter()
        .filter(|(name, _)| convention.is_y_column(name))
        .enumerate()
        .map(|(idx, (name, y))| Series {
            label: name.to_string(),
            x: x.to_vec(),
            y: y.to_vec(),
            color: SeriesColor::for_index(idx),
        })
        .collect();

    if series.is_empty() {
        return Err(PlotError::NoQualifyingSeries {
            source_label: source_label.to_string(),
            marker: convention.y_marker.clone(),
        });
    }

    let (x_min, x_max) = min_max(x.iter().copied());
    let (y_min, y_max) = min_max(series.iter().flat_map(|s| s.y.iter().copied()));

    Ok(Extraction {
        bounds: Bounds {
            x_min: x_min - AXIS_PADDING,
            x_max: x_max + AXIS_PADDING,
            y_min: y_min - AXIS_PADDING,
            y_max: y_max + AXIS_PADDING,
        },
        series,
    })
}

/// Min and max over the finite values; no finite value collapses to (0, 0)
fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi { (0.0, 0.0) } else { (lo, hi) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new([
            ("x", vec![0.0, 1.0, 2.0]),
            ("y=a", vec![5.0, -2.0, 3.0]),
            ("note", vec![100.0, 100.0, 100.0]),
            ("y=b", vec![1.0, 9.0, 4.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_extract_series_in_column_order() {
        let out = extract(&sample_table(), &SeriesConvention::default(), "a.csv").unwrap();

        let labels: Vec<&str> = out.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["y=a", "y=b"]);
        assert_eq!(out.series[1].x, vec![0.0, 1.0, 2.0]);
        assert_eq!(out.series[1].y, vec![1.0, 9.0, 4.0]);
    }

    #[test]
    fn test_bounds_are_padded_and_skip_unmarked_columns() {
        let out = extract(&sample_table(), &SeriesConvention::default(), "a.csv").unwrap();

        assert_eq!(
            out.bounds,
            Bounds {
                x_min: -1.0,
                x_max: 3.0,
                y_min: -3.0,
                y_max: 10.0,
            }
        );
    }

    #[test]
    fn test_no_marker_columns_is_an_error() {
        let table = Table::new([("x", vec![1.0]), ("value", vec![2.0])]).unwrap();
        let err = extract(&table, &SeriesConvention::default(), "flat.csv").unwrap_err();
        assert!(matches!(err, PlotError::NoQualifyingSeries { source_label, .. } if source_label == "flat.csv"));
    }

    #[test]
    fn test_missing_x_column_is_an_error() {
        let table = Table::new([("t", vec![1.0]), ("y=1", vec![2.0])]).unwrap();
        let err = extract(&table, &SeriesConvention::default(), "t.csv").unwrap_err();
        assert!(matches!(err, PlotError::ColumnNotFound { column } if column == "x"));
    }

    #[test]
    fn test_duplicate_labels_are_kept() {
        let table = Table::new([
            ("x", vec![1.0]),
            ("y=1", vec![2.0]),
            ("y=1", vec![3.0]),
        ])
        .unwrap();
        let out = extract(&table, &SeriesConvention::default(), "dup.csv").unwrap();
        assert_eq!(out.series.len(), 2);
        assert_eq!(out.series[0].label, out.series[1].label);
    }

    #[test]
    fn test_colors_cycle_through_palette() {
        let mut columns = vec![("x".to_string(), vec![0.0])];
        for i in 0..6 {
            columns.push((format!("y={}", i), vec![i as f64]));
        }
        let table = Table::new(columns).unwrap();
        let out = extract(&table, &SeriesConvention::default(), "many.csv").unwrap();

        assert_eq!(out.series.len(), 6);
        assert_eq!(out.series[4].color, out.series[0].color);
        assert_eq!(out.series[5].color, out.series[1].color);
        assert_ne!(out.series[0].color, out.series[1].color);
    }

    #[test]
    fn test_loose_marker_matches_more_columns() {
        let table = Table::new([
            ("x", vec![0.0]),
            ("y", vec![1.0]),
            ("y=2", vec![2.0]),
            ("day", vec![50.0]),
        ])
        .unwrap();
        let strict = extract(&table, &SeriesConvention::default(), "t.csv").unwrap();
        assert_eq!(strict.series.len(), 1);

        let loose = SeriesConvention {
            y_marker: "y".to_string(),
            ..SeriesConvention::default()
        };
        let out = extract(&table, &loose, "t.csv").unwrap();
        assert_eq!(out.series.len(), 3);
        assert_eq!(out.bounds.y_max, 51.0);
    }

    #[test]
    fn test_nan_cells_are_ignored_for_bounds() {
        let table = Table::new([
            ("x", vec![0.0, 1.0, f64::NAN]),
            ("y=1", vec![f64::NAN, 2.0, 4.0]),
        ])
        .unwrap();
        let out = extract(&table, &SeriesConvention::default(), "t.csv").unwrap();
        assert_eq!(out.bounds.x_min, -1.0);
        assert_eq!(out.bounds.x_max, 2.0);
        assert_eq!(out.bounds.y_min, 1.0);
        assert_eq!(out.bounds.y_max, 5.0);
    }

    #[test]
    fn test_infinite_cells_are_ignored_for_bounds() {
        let table = Table::new([
            ("x", vec![0.0, f64::INFINITY, 2.0]),
            ("y=1", vec![f64::NEG_INFINITY, 3.0, f64::INFINITY]),
        ])
        .unwrap();
        let out = extract(&table, &SeriesConvention::default(), "inf.csv").unwrap();
        assert_eq!(
            out.bounds,
            Bounds {
                x_min: -1.0,
                x_max: 3.0,
                y_min: 2.0,
                y_max: 4.0,
            }
        );

        let table = Table::new([("x", vec![f64::INFINITY]), ("y=1", vec![f64::NAN])]).unwrap();
        let out = extract(&table, &SeriesConvention::default(), "none.csv").unwrap();
        assert_eq!((out.bounds.x_min, out.bounds.x_max), (-1.0, 1.0));
        assert_eq!((out.bounds.y_min, out.bounds.y_max), (-1.0, 1.0));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let table = sample_table();
        let convention = SeriesConvention::default();
        assert_eq!(
            extract(&table, &convention, "a.csv").unwrap(),
            extract(&table, &convention, "a.csv").unwrap()
        );
    }
}
