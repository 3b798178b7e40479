pub mod error_handler;
pub mod event_handler;
