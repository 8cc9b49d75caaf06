use std::fmt::Debug;

use error_stack::{report, Context, Result, ResultExt};
use google_sheets4::{
    api::{BatchUpdateSpreadsheetRequest, Request, Sheet, ValueRange},
    Sheets,
};
use tracing::instrument;

use crate::domain::sheets::a1_notation::A1Notation;
use crate::infrastructure::config::sheets_config::SpreadsheetConfig;

use super::{auth, http_client};

/// How the service interprets written cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInputOption {
    /// Values are stored as-is, without formula or date coercion.
    Raw,
    /// Values are parsed as if typed by a user (formulas, dates).
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<
        google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
    >,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Debug)]
pub enum SpreadsheetManagerError {
    FailedToReadCredentials,
    FailedToBuildAuthenticator,
    FailedToFetchSpreadsheetMetadata,
    SheetTabNotFound(String),
    FailedToFetchRange,
    FailedToWriteRange,
    FailedToApplyFormatting,
}

impl std::fmt::Display for SpreadsheetManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpreadsheetManagerError::SheetTabNotFound(title) => {
                write!(f, "Sheet tab \"{}\" not found", title)
            }
            other => write!(f, "{:?}", other),
        }
    }
}

impl Context for SpreadsheetManagerError {}

impl SpreadsheetManager {
    /// Reads the service-account key and builds the Sheets hub. Each manager
    /// authenticates once at construction; there is no credential caching
    /// across managers.
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }

    #[instrument]
    pub async fn read_range(
        &self,
        range: &A1Notation,
    ) -> Result<ValueRange, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range.as_ref())
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to read range {}", range))?;

        Ok(response.1)
    }

    #[instrument(skip(value_range))]
    pub async fn write_range(
        &self,
        range: &A1Notation,
        value_range: ValueRange,
        input_option: ValueInputOption,
    ) -> Result<(), SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_update(value_range, &self.config.spreadsheet_id, range.as_ref())
            .value_input_option(input_option.as_str())
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write to range {}", range))
    }

    /// Resolves a tab's numeric sheet id from the spreadsheet metadata.
    #[instrument]
    pub async fn sheet_id_by_title(&self, title: &str) -> Result<i32, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .get(&self.config.spreadsheet_id)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchSpreadsheetMetadata)?;

        let sheets = response
            .1
            .sheets
            .ok_or(report!(
                SpreadsheetManagerError::FailedToFetchSpreadsheetMetadata
            ))
            .attach_printable("Spreadsheet response has no sheet list")?;

        find_sheet_id(&sheets, title)
    }

    #[instrument(skip(requests), fields(request_count = requests.len()))]
    pub async fn batch_update(
        &self,
        requests: Vec<Request>,
    ) -> Result<(), SpreadsheetManagerError> {
        let body = BatchUpdateSpreadsheetRequest {
            requests: Some(requests),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(body, &self.config.spreadsheet_id)
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToApplyFormatting)
    }
}

pub fn find_sheet_id(sheets: &[Sheet], title: &str) -> Result<i32, SpreadsheetManagerError> {
    sheets
        .iter()
        .find(|sheet| {
            sheet
                .properties
                .as_ref()
                .and_then(|props| props.title.as_deref())
                == Some(title)
        })
        .and_then(|sheet| sheet.properties.as_ref().and_then(|props| props.sheet_id))
        .ok_or(report!(SpreadsheetManagerError::SheetTabNotFound(
            title.to_owned()
        )))
}

#[cfg(test)]
mod tests {
    use google_sheets4::api::SheetProperties;

    use super::*;

    fn sheet(title: &str, sheet_id: i32) -> Sheet {
        Sheet {
            properties: Some(SheetProperties {
                title: Some(title.to_string()),
                sheet_id: Some(sheet_id),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_find_sheet_id_by_title() {
        let sheets = vec![sheet("Other", 7), sheet("Test Run", 42)];
        assert_eq!(find_sheet_id(&sheets, "Test Run").unwrap(), 42);
    }

    #[test]
    fn test_find_sheet_id_unknown_title_is_descriptive() {
        let sheets = vec![sheet("Other", 7)];
        let report = find_sheet_id(&sheets, "Test Run").unwrap_err();
        assert!(matches!(
            report.current_context(),
            SpreadsheetManagerError::SheetTabNotFound(title) if title == "Test Run"
        ));
        assert!(report.to_string().contains("Sheet tab \"Test Run\" not found"));
    }

    #[test]
    fn test_find_sheet_id_empty_list() {
        assert!(find_sheet_id(&[], "Test Run").is_err());
    }

    #[test]
    fn test_value_input_option_wire_names() {
        assert_eq!(ValueInputOption::Raw.as_str(), "RAW");
        assert_eq!(ValueInputOption::UserEntered.as_str(), "USER_ENTERED");
    }
}
