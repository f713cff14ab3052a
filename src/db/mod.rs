pub mod connection;
pub mod schema;

pub use connection::connect_db;
pub use schema::ensure_schema;
