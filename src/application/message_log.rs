use error_stack::{Context, Result, ResultExt};
use google_sheets4::api::ValueRange;
use serde_json::Value;
use tracing::instrument;

use crate::domain::message::{NewMessage, RowRecord, HEADER};
use crate::domain::sheets::a1_notation::{A1Notation, ToA1Notation};
use crate::domain::sheets::cell_range::{CellRange, ColumnSpan};
use crate::domain::sheets::column::Column;
use crate::domain::sheets::row::Row;
use crate::infrastructure::sheets::spreadsheet_manager::{SpreadsheetManager, ValueInputOption};
use crate::infrastructure::sheets::value_range_factory::ValueRangeFactory;

use super::styling::banding_requests;

/// Tab that receives the records.
pub const SHEET_TAB: &str = "Test Run";

const HEADER_ROW: Row = Row(1);
const FIRST_DATA_ROW: Row = Row(2);

#[derive(Debug)]
pub enum MessageLogError {
    FailedToEnsureHeader,
    FailedToInsertRow,
    FailedToStyleRows,
}

impl std::fmt::Display for MessageLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Context for MessageLogError {}

/// Append-only message log backed by one spreadsheet tab. The remote sheet is
/// the sole source of truth; the log holds no local state between calls.
#[derive(Debug)]
pub struct MessageLog {
    manager: SpreadsheetManager,
    tab: String,
}

impl MessageLog {
    pub fn new(manager: SpreadsheetManager) -> Self {
        Self::with_tab(manager, SHEET_TAB)
    }

    pub fn with_tab(manager: SpreadsheetManager, tab: impl Into<String>) -> Self {
        MessageLog {
            manager,
            tab: tab.into(),
        }
    }

    fn first_column(&self) -> Column {
        Column::from(1)
    }

    fn last_column(&self) -> Column {
        Column::from(HEADER.len() as u32)
    }

    /// `'Test Run'!A1:D1`
    fn header_range(&self) -> A1Notation {
        CellRange::single_row(HEADER_ROW, self.first_column(), self.last_column())
            .to_a1_notation(Some(&self.tab))
    }

    /// `'Test Run'!A2:D` — every data row, used to find the next empty row.
    fn data_scan_range(&self) -> A1Notation {
        ColumnSpan::from_row(self.first_column(), self.last_column(), FIRST_DATA_ROW)
            .to_a1_notation(Some(&self.tab))
    }

    /// `'Test Run'!A:D` — all populated rows including the header.
    fn full_scan_range(&self) -> A1Notation {
        ColumnSpan::whole_columns(self.first_column(), self.last_column())
            .to_a1_notation(Some(&self.tab))
    }

    /// `'Test Run'!A{n}:D{n}`
    fn record_range(&self, row: Row) -> A1Notation {
        CellRange::single_row(row, self.first_column(), self.last_column())
            .to_a1_notation(Some(&self.tab))
    }

    /// Makes sure row 1 holds the fixed header tuple. When the header already
    /// matches, this is a single read with no write; otherwise row 1 is
    /// overwritten with `RAW` input so the header cells stay literal.
    #[instrument(skip(self))]
    pub async fn ensure_header_row(&self) -> Result<(), MessageLogError> {
        let range = self.header_range();
        let current = self
            .manager
            .read_range(&range)
            .await
            .change_context(MessageLogError::FailedToEnsureHeader)?;

        if header_matches(current.values.as_deref()) {
            return Ok(());
        }

        self.manager
            .write_range(
                &range,
                ValueRange::from_single_row(&HEADER),
                ValueInputOption::Raw,
            )
            .await
            .change_context(MessageLogError::FailedToEnsureHeader)
    }

    /// Reapplies alternating banding and the bold message column across all
    /// data rows in one batch update. A header-only or empty tab issues no
    /// formatting request at all. Fails with a tab-not-found error before any
    /// formatting request when the tab title is unknown.
    #[instrument(skip(self))]
    pub async fn style_sheet_rows(&self) -> Result<(), MessageLogError> {
        let scanned = self
            .manager
            .read_range(&self.full_scan_range())
            .await
            .change_context(MessageLogError::FailedToStyleRows)?;

        let total_rows = scanned.values.as_ref().map_or(0, Vec::len);
        if total_rows < 2 {
            return Ok(());
        }

        let sheet_id = self
            .manager
            .sheet_id_by_title(&self.tab)
            .await
            .change_context(MessageLogError::FailedToStyleRows)?;

        self.manager
            .batch_update(banding_requests(sheet_id, total_rows))
            .await
            .change_context(MessageLogError::FailedToStyleRows)
    }

    /// Appends one record below the last data row and restyles the whole tab.
    ///
    /// The target row comes from counting existing data rows in a plain read;
    /// there is no conditional write or locking, so two concurrent inserts
    /// against the same tab can compute the same target and overwrite each
    /// other. A styling failure after the write leaves the record in place
    /// with stale formatting; the write is not rolled back.
    #[instrument(skip(self), fields(from = %message.from))]
    pub async fn insert_row(&self, message: NewMessage) -> Result<RowRecord, MessageLogError> {
        let record = RowRecord::create(message);

        self.ensure_header_row()
            .await
            .change_context(MessageLogError::FailedToInsertRow)?;

        let existing = self
            .manager
            .read_range(&self.data_scan_range())
            .await
            .change_context(MessageLogError::FailedToInsertRow)?;
        let data_rows = existing.values.as_ref().map_or(0, Vec::len);

        let range = self.record_range(append_target_row(data_rows));
        tracing::info!(%range, data_rows, "writing record to exact range");

        self.manager
            .write_range(
                &range,
                ValueRange::from_single_row(&record.cells()),
                ValueInputOption::UserEntered,
            )
            .await
            .change_context(MessageLogError::FailedToInsertRow)?;

        self.style_sheet_rows()
            .await
            .change_context(MessageLogError::FailedToInsertRow)?;

        Ok(record)
    }
}

/// True when the first returned row equals the header tuple, cell for cell.
pub fn header_matches(values: Option<&[Vec<Value>]>) -> bool {
    let Some(first_row) = values.and_then(|rows| rows.first()) else {
        return false;
    };

    first_row.len() == HEADER.len()
        && first_row
            .iter()
            .zip(HEADER)
            .all(|(cell, expected)| cell.as_str() == Some(expected))
}

/// Row 1 is the header, data starts at row 2, so `n` existing data rows put
/// the next record at row `n + 2`.
pub fn append_target_row(existing_data_rows: usize) -> Row {
    Row::from(FIRST_DATA_ROW.0 + existing_data_rows as u32)
}
