use polars::prelude::*;
use std::path::Path;

use super::table::{Table, TableSource};
use crate::constants::table::INFER_SCHEMA_ROWS;
use crate::error::{PlotError, Result};

/// Loads CSV or Parquet files through Polars
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTableSource;

impl FileTableSource {
    pub fn new() -> Self {
        Self
    }

    /// Read the file into a DataFrame (CSV or Parquet)
    fn read_frame(path: &Path) -> Result<DataFrame> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| PlotError::UnsupportedFormat {
                extension: String::new(),
            })?;

        let lf = match extension.to_lowercase().as_str() {
            "parquet" => LazyFrame::scan_parquet(path, Default::default())?,
            "csv" => LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
                .with_try_parse_dates(true)
                .finish()?,
            ext => {
                return Err(PlotError::UnsupportedFormat {
                    extension: ext.to_string(),
                });
            }
        };

        Ok(lf.collect()?)
    }

    /// Get a column's numeric values as Vec<f64>
    /// Non-numeric values are converted to NaN
    /// Datetime/Date columns are converted to Unix timestamps (seconds since epoch)
    fn column_as_f64(series: &Series) -> Result<Vec<f64>> {
        match series.dtype() {
            DataType::Datetime(unit, _) => {
                let per_second = match unit {
                    TimeUnit::Nanoseconds => 1_000_000_000.0,
                    TimeUnit::Microseconds => 1_000_000.0,
                    TimeUnit::Milliseconds => 1_000.0,
                };
                let timestamps = series
                    .datetime()?
                    .into_iter()
                    .map(|opt| opt.map(|ts| ts as f64 / per_second).unwrap_or(f64::NAN))
                    .collect();
                return Ok(timestamps);
            }
            DataType::Date => {
                let timestamps = series
                    .date()?
                    .into_iter()
                    .map(|opt| opt.map(|days| days as f64 * 86400.0).unwrap_or(f64::NAN))
                    .collect();
                return Ok(timestamps);
            }
            _ => {}
        }

        match series.cast(&DataType::Float64) {
            Ok(s) => Ok(s
                .f64()?
                .into_iter()
                .map(|opt| opt.unwrap_or(f64::NAN))
                .collect()),
            Err(_) => {
                // For string columns, try to parse as f64
                if let Ok(str_series) = series.str() {
                    Ok(str_series
                        .into_iter()
                        .map(|opt| opt.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(f64::NAN))
                        .collect())
                } else {
                    Ok(vec![f64::NAN; series.len()])
                }
            }
        }
    }
}

impl TableSource for FileTableSource {
    fn load_table(&self, path: &Path) -> Result<Table> {
        profiling::scope!("load_table");

        if !path.is_file() {
            return Err(PlotError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let df = Self::read_frame(path)?;
        let columns = df
            .get_columns()
            .iter()
            .map(|col| {
                let series = col.as_materialized_series();
                Self::column_as_f64(series).map(|values| (series.name().to_string(), values))
            })
            .collect::<Result<Vec<_>>>()?;

        let table = Table::new(columns)?;
        tracing::debug!(
            path = %path.display(),
            rows = table.height(),
            columns = table.width(),
            "table loaded"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_loading() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x,y=1,y=2").unwrap();
        writeln!(file, "1,2,3").unwrap();
        writeln!(file, "4,5,6").unwrap();
        writeln!(file, "7,8,9").unwrap();
        file.flush().unwrap();

        let table = FileTableSource::new().load_table(file.path()).unwrap();

        assert_eq!(table.height(), 3);
        assert_eq!(table.width(), 3);
        assert_eq!(table.columns(), &["x", "y=1", "y=2"]);
        assert_eq!(table.column("x").unwrap(), &[1.0, 4.0, 7.0]);
        assert_eq!(table.column("y=2").unwrap(), &[3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_missing_cells_become_nan() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x,y=1").unwrap();
        writeln!(file, "1,2.5").unwrap();
        writeln!(file, "2,").unwrap();
        file.flush().unwrap();

        let table = FileTableSource::new().load_table(file.path()).unwrap();
        let y = table.column("y=1").unwrap();

        assert_eq!(y[0], 2.5);
        assert!(y[1].is_nan());
    }

    #[test]
    fn test_date_column_becomes_unix_seconds() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x,y=1").unwrap();
        writeln!(file, "2024-01-01,1").unwrap();
        writeln!(file, "2024-01-02,2").unwrap();
        file.flush().unwrap();

        let table = FileTableSource::new().load_table(file.path()).unwrap();

        assert_eq!(table.column("x").unwrap(), &[1_704_067_200.0, 1_704_153_600.0]);
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileTableSource::new()
            .load_table(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert!(matches!(err, PlotError::SourceNotFound { .. }));

        // A directory is not a readable table either
        let err = FileTableSource::new().load_table(dir.path()).unwrap_err();
        assert!(matches!(err, PlotError::SourceNotFound { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "x,y=1").unwrap();
        file.flush().unwrap();

        let err = FileTableSource::new().load_table(file.path()).unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedFormat { extension } if extension == "txt"));
    }
}
