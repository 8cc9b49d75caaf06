use super::a1_notation::{A1Notation, ToA1Notation};
use super::cell_position::CellPosition;
use super::column::Column;
use super::row::Row;

/// Rectangular cell range with both corners fixed, like `A1:D1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellPosition,
    pub end: CellPosition,
}

impl CellRange {
    pub fn new(start: CellPosition, end: CellPosition) -> Self {
        CellRange { start, end }
    }

    /// Range covering a contiguous run of columns within a single row.
    pub fn single_row(row: Row, start_col: Column, end_col: Column) -> Self {
        CellRange {
            start: CellPosition::new(start_col, row),
            end: CellPosition::new(end_col, row),
        }
    }

    pub fn row_count(&self) -> u32 {
        self.end.row.0 - self.start.row.0 + 1
    }

    pub fn column_count(&self) -> u32 {
        self.end.col.value() - self.start.col.value() + 1
    }
}

impl ToA1Notation for CellRange {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        let start = self.start.to_a1_notation(None);
        let end = self.end.to_a1_notation(None);
        match sheet_name {
            Some(sheet_name) => A1Notation(format!("'{}'!{}:{}", sheet_name, start, end)),
            None => A1Notation(format!("{}:{}", start, end)),
        }
    }
}

/// Column-bounded range with no bottom row, like `A:D` or `A2:D`. The
/// spreadsheet service resolves the open end to the last populated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: Column,
    pub end: Column,
    /// First row of the span; `None` covers the whole columns.
    pub from_row: Option<Row>,
}

impl ColumnSpan {
    pub fn whole_columns(start: Column, end: Column) -> Self {
        ColumnSpan {
            start,
            end,
            from_row: None,
        }
    }

    pub fn from_row(start: Column, end: Column, row: Row) -> Self {
        ColumnSpan {
            start,
            end,
            from_row: Some(row),
        }
    }
}

impl ToA1Notation for ColumnSpan {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        let local = match self.from_row {
            Some(row) => format!("{}{}:{}", self.start, row, self.end),
            None => format!("{}:{}", self.start, self.end),
        };
        match sheet_name {
            Some(sheet_name) => A1Notation(format!("'{}'!{}", sheet_name, local)),
            None => A1Notation(local),
        }
    }
}
