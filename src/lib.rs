pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::message_log::{MessageLog, MessageLogError, SHEET_TAB};
pub use domain::message::{NewMessage, RowRecord};
pub use infrastructure::config::app_config::AppConfig;
pub use infrastructure::config::sheets_config::SpreadsheetConfig;
pub use infrastructure::sheets::spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError};
