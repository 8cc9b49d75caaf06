use super::a1_notation::{A1Notation, ToA1Notation};
use super::column::Column;
use super::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: Column,
    pub row: Row,
}

impl CellPosition {
    pub fn new(col: Column, row: Row) -> Self {
        CellPosition { col, row }
    }
}

impl ToA1Notation for CellPosition {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        match sheet_name {
            Some(sheet_name) => A1Notation(format!("'{}'!{}{}", sheet_name, self.col, self.row)),
            None => A1Notation(format!("{}{}", self.col, self.row)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_position_to_a1_notation() {
        let position = CellPosition::new(Column::from(1), Row(1));
        assert_eq!(position.to_a1_notation(None).as_ref(), "A1");
    }

    #[test]
    fn test_cell_position_to_a1_notation_with_sheet() {
        let position = CellPosition::new(Column::from(4), Row(10));
        assert_eq!(
            position.to_a1_notation(Some("Test Run")).as_ref(),
            "'Test Run'!D10"
        );
    }
}
