//! Local JSON dataset loader.

use std::path::Path;

use game_core::BossRecord;

use crate::loaders::{LoadResult, SheetLoader, read_file};

/// Loads a dataset exported in the sheet `values` shape.
///
/// ```json
/// { "values": [["Name", "Type", ...], ["Hornet", "Main", ...]] }
/// ```
pub struct FileLoader;

impl FileLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BossRecord>> {
        let content = read_file(path)?;
        SheetLoader::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid dataset file {}: {}", path.display(), e))
    }
}
