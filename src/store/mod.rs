pub mod memory_store;
pub mod mysql_store;
pub mod store_api;

pub use memory_store::MemoryTimeLogStore;
pub use mysql_store::MySqlTimeLogStore;
pub use store_api::{StoreError, TimeLogStore};
