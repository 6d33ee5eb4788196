//! Column-oriented numeric tables and the seam for loading them

use std::path::Path;

use crate::error::{PlotError, Result};

/// Anything that can turn a path into a [`Table`]
///
/// A path that does not resolve to a readable file must yield
/// [`PlotError::SourceNotFound`]; the dashboard treats that as a silent no-op.
pub trait TableSource {
    fn load_table(&self, path: &Path) -> Result<Table>;
}

/// Column-oriented table of numeric values
///
/// Column order is preserved exactly as read. Cells that could not be read as
/// numbers are stored as NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    height: usize,
}

impl Table {
    /// Build a table from `(name, values)` pairs in column order
    pub fn new<N: Into<String>>(columns: impl IntoIterator<Item = (N, Vec<f64>)>) -> Result<Self> {
        let mut names = Vec::new();
        let mut values = Vec::new();
        let mut height = None;

        for (name, column) in columns {
            let name = name.into();
            match height {
                None => height = Some(column.len()),
                Some(expected) if expected != column.len() => {
                    return Err(PlotError::TableShape {
                        column: name,
                        expected,
                        actual: column.len(),
                    });
                }
                Some(_) => {}
            }
            names.push(name);
            values.push(column);
        }

        Ok(Self {
            names,
            columns: values,
            height: height.unwrap_or(0),
        })
    }

    /// Column names in source order
    pub fn columns(&self) -> &[String] {
        &self.names
    }

    /// Values of the first column called `name`
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Iterate `(name, values)` pairs in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .zip(&self.columns)
            .map(|(n, c)| (n.as_str(), c.as_slice()))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.names.len()
    }
}
