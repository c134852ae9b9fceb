//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool; every operation borrows one connection for
//!   its duration and returns it on completion
//! - Single-statement reads/writes go straight through the pool
//! - Order placement is the only multi-statement unit of work and runs
//!   inside a row-locking transaction

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
