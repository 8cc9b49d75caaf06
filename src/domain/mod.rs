pub mod message;
pub mod sheets;
