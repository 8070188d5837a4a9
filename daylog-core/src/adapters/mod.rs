//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - DuckDB for the Store port (daylog.duckdb / demo.duckdb)
//! - An in-memory Store for tests and scratch use
//! - Demo data generation for demo mode

pub mod demo;
pub mod duckdb;
pub mod memory;
