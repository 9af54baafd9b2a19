//! Outbound adapters implementing the repository ports.
//!
//! - **persistence**: PostgreSQL via Diesel and a bb8 pool
//! - **memory**: in-process stores for database-less runs and tests

pub mod memory;
pub mod persistence;
