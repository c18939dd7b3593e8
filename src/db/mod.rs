pub mod log;
pub mod migrate;
pub mod persistence;
pub mod sqlite;

pub use persistence::{MemoryPersistence, Persistence};
pub use sqlite::SqlitePersistence;
