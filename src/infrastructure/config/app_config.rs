use config::Config;
use error_stack::{Context, Result, ResultExt};

use super::sheets_config::SpreadsheetConfig;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
}

#[derive(Debug)]
pub struct AppConfigError;

impl std::fmt::Display for AppConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load application config")
    }
}

impl Context for AppConfigError {}

impl AppConfig {
    /// Layers an optional `Config.toml` with `SHEETLOG_`-prefixed environment
    /// variables (e.g. `SHEETLOG_SHEETS__SPREADSHEET_ID`,
    /// `SHEETLOG_SHEETS__PRIV_KEY`).
    pub fn load() -> Result<Self, AppConfigError> {
        Config::builder()
            .add_source(config::File::with_name("Config").required(false))
            .add_source(config::Environment::with_prefix("SHEETLOG").separator("__"))
            .build()
            .change_context(AppConfigError)?
            .try_deserialize()
            .change_context(AppConfigError)
            .attach_printable("Config file or environment is missing required properties")
    }
}
