pub mod time_log_service;
