pub mod collections;
pub mod filter;
pub mod manager;
pub mod memory;
pub mod mongo;
pub mod store;

pub use collections::Collection;
pub use manager::DatabaseManager;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, StoreError};
