//! Common types and traits for all entity records

pub mod entity_record;
pub mod record_id;

// Re-exports
pub use entity_record::EntityRecord;
pub use record_id::RecordId;
