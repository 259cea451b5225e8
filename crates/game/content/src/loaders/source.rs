//! Dataset source selection.

use std::path::PathBuf;

use game_core::Dataset;

use crate::loaders::{FileLoader, LoadResult, SheetsClient};

/// Where the boss dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    /// Local JSON file in the sheet `values` shape.
    File(PathBuf),
    /// Google Sheets range.
    Remote {
        spreadsheet_id: String,
        range: String,
        api_key: String,
    },
}

impl DatasetSource {
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("file {}", path.display()),
            Self::Remote {
                spreadsheet_id,
                range,
                ..
            } => format!("sheet {} ({})", spreadsheet_id, range),
        }
    }
}

/// Load and validate the dataset. An empty result is an error.
pub async fn load_dataset(source: &DatasetSource) -> LoadResult<Dataset> {
    let records = match source {
        DatasetSource::File(path) => FileLoader::load(path)?,
        DatasetSource::Remote {
            spreadsheet_id,
            range,
            api_key,
        } => {
            SheetsClient::new(spreadsheet_id, range, api_key)
                .fetch()
                .await?
        }
    };

    let dataset = Dataset::new(records).map_err(|e| {
        tracing::error!(
            severity = e.severity().as_str(),
            source = %source.describe(),
            "Dataset rejected: {}",
            e
        );
        anyhow::anyhow!("Dataset from {} is unusable: {}", source.describe(), e)
    })?;

    tracing::info!(
        bosses = dataset.len(),
        source = %source.describe(),
        "Boss dataset loaded"
    );
    Ok(dataset)
}
