use chrono::{SecondsFormat, Utc};
use rand::Rng;

/// Fixed header tuple occupying row 1 of the tab.
pub const HEADER: [&str; 4] = ["id", "from", "message", "created_at"];

pub const ROW_ID_LEN: usize = 12;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Caller-supplied part of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub from: String,
    pub message: String,
}

/// One data row as written to the sheet. Records are append-only; nothing in
/// this crate updates or deletes them once written.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RowRecord {
    pub id: String,
    pub from: String,
    pub message: String,
    pub created_at: String,
}

impl RowRecord {
    /// Stamps a new record with a generated id and the current UTC time.
    pub fn create(message: NewMessage) -> Self {
        RowRecord {
            id: generate_row_id(),
            from: message.from,
            message: message.message,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Cells in header order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.id.clone(),
            self.from.clone(),
            self.message.clone(),
            self.created_at.clone(),
        ]
    }
}

/// Random base-36 id, 12 characters. Not guaranteed unique; collisions are
/// possible and unhandled.
pub fn generate_row_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ROW_ID_LEN)
        .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_length_and_alphabet() {
        for _ in 0..100 {
            let id = generate_row_id();
            assert_eq!(id.len(), ROW_ID_LEN);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_record_cells_follow_header_order() {
        let record = RowRecord {
            id: "abc123def456".to_string(),
            from: "a@x.com".to_string(),
            message: "hi".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        assert_eq!(
            record.cells(),
            [
                "abc123def456".to_string(),
                "a@x.com".to_string(),
                "hi".to_string(),
                "2024-01-01T00:00:00.000Z".to_string(),
            ]
        );
    }

    #[test]
    fn test_created_at_is_rfc3339_utc_with_millis() {
        let record = RowRecord::create(NewMessage {
            from: "a@x.com".to_string(),
            message: "hi".to_string(),
        });
        assert!(record.created_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&record.created_at).is_ok());
    }

    #[test]
    fn test_header_shape() {
        assert_eq!(HEADER, ["id", "from", "message", "created_at"]);
    }
}
