use std::fmt::Formatter;

/// 1-based spreadsheet column. Displays as column letters (A, B, ..., Z, AA, ...).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Column(u32);

impl Column {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", number_to_letters(self.0))
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Show both the numeric and letter representation
        write!(f, "Column(u32: {}, letters: {})", self.0, self)
    }
}

impl From<u32> for Column {
    fn from(value: u32) -> Self {
        Column(value)
    }
}

impl From<Column> for u32 {
    fn from(col: Column) -> Self {
        col.0
    }
}

fn number_to_letters(number: u32) -> String {
    if number == 0 {
        panic!("Column number cannot be zero");
    }

    let mut number = number;
    let mut result = String::new();
    while number > 0 {
        let remainder = (number - 1) % 26;
        let letter = (remainder as u8 + b'A') as char;
        result.push(letter);
        number = (number - remainder) / 26;
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_display_a() {
        assert_eq!(Column(1).to_string(), "A");
    }

    #[test]
    fn test_column_display_d() {
        assert_eq!(Column(4).to_string(), "D");
    }

    #[test]
    fn test_column_display_z() {
        assert_eq!(Column(26).to_string(), "Z");
    }

    #[test]
    fn test_column_display_aa() {
        assert_eq!(Column(27).to_string(), "AA");
    }

    #[test]
    fn test_column_display_az() {
        assert_eq!(Column(52).to_string(), "AZ");
    }

    #[test]
    fn test_column_display_ba() {
        assert_eq!(Column(53).to_string(), "BA");
    }

    #[test]
    fn test_column_from_u32() {
        let col: Column = 5.into();
        assert_eq!(col, Column(5));
    }

    #[test]
    #[should_panic(expected = "Column number cannot be zero")]
    fn test_column_display_zero_panics() {
        let _ = Column(0).to_string();
    }
}
