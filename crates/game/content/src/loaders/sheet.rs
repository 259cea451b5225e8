//! Spreadsheet `values` payload parsing.

use game_core::{BossRecord, RecordError};
use serde::Deserialize;

use crate::loaders::LoadResult;

/// Body of a `spreadsheets.values.get` response.
///
/// Only `values` matters; the first row holds the column headers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetValues {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Converts sheet payloads into boss records.
pub struct SheetLoader;

impl SheetLoader {
    /// Parse a JSON `values` payload into records.
    pub fn parse(json: &str) -> LoadResult<Vec<BossRecord>> {
        let sheet: SheetValues = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse sheet values JSON: {}", e))?;
        Self::records(sheet)
    }

    /// Zip every data row with the header row.
    ///
    /// Short rows leave their trailing fields empty. Rows without a name are
    /// skipped with a warning rather than failing the whole load.
    pub fn records(sheet: SheetValues) -> LoadResult<Vec<BossRecord>> {
        let mut rows = sheet.values.into_iter();
        let headers = rows
            .next()
            .ok_or_else(|| anyhow::anyhow!("Sheet has no header row"))?;

        let mut records = Vec::new();
        for (index, row) in rows.enumerate() {
            match BossRecord::from_pairs(headers.iter().zip(row)) {
                Ok(record) => records.push(record),
                Err(RecordError::MissingName) => {
                    // +2: 1-based numbering plus the header row.
                    tracing::warn!(row = index + 2, "Skipping sheet row without a name");
                }
            }
        }

        tracing::debug!(count = records.len(), "Parsed boss records from sheet");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use game_core::Field;

    use super::*;

    #[test]
    fn test_parse_sheet_payload() {
        let json = r#"{
            "range": "Bosses!A1:J3",
            "majorDimension": "ROWS",
            "values": [
                ["Name", "Type", "Attacks", "Ascend HP", "Image"],
                ["Hornet", "Main", "Lunge, Throw", "900", "https://img/hornet.png"],
                ["Gruz Mother", "Optional"]
            ]
        }"#;

        let records = SheetLoader::parse(json).expect("valid payload");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "Hornet");
        assert_eq!(records[0].get(Field::Attacks), "Lunge, Throw");
        assert_eq!(records[0].image(), Some("https://img/hornet.png"));
        assert_eq!(records[1].get(Field::Type), "Optional");
        assert_eq!(records[1].get(Field::AscendHp), "");
        assert_eq!(records[1].image(), None);
    }

    #[test]
    fn test_rows_without_name_are_skipped() {
        let sheet = SheetValues {
            values: vec![
                vec!["Name".into(), "Type".into()],
                vec!["".into(), "Main".into()],
                vec!["Nosk".into(), "Main".into()],
            ],
            ..Default::default()
        };

        let records = SheetLoader::records(sheet).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Nosk");
    }

    #[test]
    fn test_missing_header_row_fails() {
        assert!(SheetLoader::parse(r#"{"values": []}"#).is_err());
        assert!(SheetLoader::parse("not json").is_err());
    }
}
