//! orderdesk-server: inventory and ordering HTTP API
//!
//! Exposes a small product catalog over HTTP and places orders through a
//! row-locking transaction so stock can never go negative under
//! concurrent requests.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use db::create_pool;
pub use http::{run_server, ServerConfig};
