//! Content loaders for reading the boss dataset.
//!
//! - [`sheet`]: the `values` payload format shared by every source
//! - [`file`]: local JSON file source
//! - [`remote`]: Google Sheets API source
//! - [`source`]: source selection and dataset validation

pub mod file;
pub mod remote;
pub mod sheet;
pub mod source;

pub use file::FileLoader;
pub use remote::SheetsClient;
pub use sheet::{SheetLoader, SheetValues};
pub use source::{DatasetSource, load_dataset};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
