pub mod scan;
pub mod series;
pub mod source;
pub mod table;

// Re-export key types for convenience
pub use scan::list_csv_files;
pub use series::{Bounds, Series, SeriesColor, SeriesConvention, extract};
pub use source::FileTableSource;
pub use table::{Table, TableSource};
