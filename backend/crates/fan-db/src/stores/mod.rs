pub mod memory_record_store;
pub mod record_store;
pub mod sqlite_record_store;
