pub mod backend;
pub mod errors;
pub mod match_record;
pub mod player_record;
pub mod store;

pub use errors::StoreError;
pub use store::{RecordStore, UpdateOutcome};
