pub mod connection;
pub mod error;
pub mod stores;


pub use connection::sqlite_pool::open_pool;
pub use error::{DbError, Result};
pub use stores::memory_record_store::InMemoryRecordStore;
pub use stores::record_store::RecordStore;
pub use stores::sqlite_record_store::SqliteRecordStore;
