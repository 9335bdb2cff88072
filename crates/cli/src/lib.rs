//! `supportdump-cli` library crate.
//!
//! File loading, corpus caching, atomic output and the interactive driver
//! around `supportdump-core`. The binary entrypoint lives in `main.rs`;
//! modules are public for integration testing.

pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod session;
pub mod writer;
