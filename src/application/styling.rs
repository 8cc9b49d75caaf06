use google_sheets4::api::{
    CellData, CellFormat, Color, GridRange, RepeatCellRequest, Request, TextFormat,
};
use google_sheets4::FieldMask;

/// Columns A-D hold the record; column C (0-based index 2) is the message.
const RECORD_COLUMN_COUNT: i32 = 4;
const MESSAGE_COLUMN_INDEX: i32 = 2;

fn light_green() -> Color {
    Color {
        red: Some(0.88),
        green: Some(1.0),
        blue: Some(0.88),
        ..Default::default()
    }
}

fn light_blue() -> Color {
    Color {
        red: Some(0.88),
        green: Some(0.92),
        blue: Some(1.0),
        ..Default::default()
    }
}

/// Formatting directives for every data row of the tab: an alternating
/// background over columns A-D plus bold text on the message column. Built
/// from scratch on every call; no diffing against current formatting.
///
/// `total_rows` counts all populated rows including the header. Fewer than two
/// rows (header-only or empty tab) yields no directives.
pub fn banding_requests(sheet_id: i32, total_rows: usize) -> Vec<Request> {
    if total_rows < 2 {
        return Vec::new();
    }

    let mut requests = Vec::with_capacity((total_rows - 1) * 2);
    // i is the 0-based sheet row index, which doubles as the 1-based data row
    // position since row 0 is the header.
    for i in 1..total_rows as i32 {
        let color = if i % 2 == 1 {
            light_green()
        } else {
            light_blue()
        };

        requests.push(background_request(sheet_id, i, color));
        requests.push(bold_message_request(sheet_id, i));
    }
    requests
}

fn background_request(sheet_id: i32, row_index: i32, color: Color) -> Request {
    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(row_index),
                end_row_index: Some(row_index + 1),
                start_column_index: Some(0),
                end_column_index: Some(RECORD_COLUMN_COUNT),
            }),
            cell: Some(CellData {
                user_entered_format: Some(CellFormat {
                    background_color: Some(color),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["userEnteredFormat.backgroundColor"])),
        }),
        ..Default::default()
    }
}

fn bold_message_request(sheet_id: i32, row_index: i32) -> Request {
    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(row_index),
                end_row_index: Some(row_index + 1),
                start_column_index: Some(MESSAGE_COLUMN_INDEX),
                end_column_index: Some(MESSAGE_COLUMN_INDEX + 1),
            }),
            cell: Some(CellData {
                user_entered_format: Some(CellFormat {
                    text_format: Some(TextFormat {
                        bold: Some(true),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["userEnteredFormat.textFormat.bold"])),
        }),
        ..Default::default()
    }
}
