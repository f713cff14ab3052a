pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
