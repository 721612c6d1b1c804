pub mod error;
pub mod memory;
pub mod schema;
pub mod snapshot;
pub mod sqlite;
pub mod traits;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use snapshot::{clear_draft, load_draft, parse_snapshot, save_draft};
pub use sqlite::SqliteStore;
pub use traits::*;
