pub mod ping_handler;
pub mod time_handler;
