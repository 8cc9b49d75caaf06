use std::{fmt::Formatter, ops::Deref};

/// 1-based spreadsheet row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Row(pub u32);

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for Row {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u32> for Row {
    fn from(value: u32) -> Self {
        Row(value)
    }
}

impl From<usize> for Row {
    fn from(value: usize) -> Self {
        Row(value as u32)
    }
}

impl From<Row> for u32 {
    fn from(row: Row) -> Self {
        row.0
    }
}
