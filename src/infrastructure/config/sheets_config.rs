#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    /// Path to the service account key JSON file.
    pub priv_key: Box<str>,
    pub spreadsheet_id: Box<str>,
}
