//! Google Sheets HTTP client.

use anyhow::{Context, Result, anyhow};
use game_core::BossRecord;

use crate::loaders::{SheetLoader, SheetValues};

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Read-only client for one spreadsheet range.
///
/// Errors never carry the request URL, since it embeds the API key.
pub struct SheetsClient {
    endpoint: String,
    spreadsheet_id: String,
    range: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl SheetsClient {
    pub fn new(
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: SHEETS_API.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Point the client at another Sheets-compatible base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// `values.get` endpoint for the configured range.
    pub fn url(&self) -> String {
        format!(
            "{}/{}/values/{}?key={}",
            self.endpoint, self.spreadsheet_id, self.range, self.api_key
        )
    }

    /// Fetch the range and convert it to records.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - The API answers with a non-success status
    /// - Response parsing fails
    pub async fn fetch(&self) -> Result<Vec<BossRecord>> {
        tracing::debug!(
            spreadsheet = %self.spreadsheet_id,
            range = %self.range,
            "Fetching boss sheet"
        );

        let response = self
            .http_client
            .get(self.url())
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to the Sheets API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!(
                "Sheets API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        let sheet: SheetValues = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse Sheets API response")?;

        SheetLoader::records(sheet)
    }
}
