//! # Unit Components
//!
//! Mirrors the `mipsviz-core` module tree: one test module per source module.


/// Unit tests for configuration defaults and JSON loading.
pub mod config;



/// Unit tests for program loading and the simulation driver.
pub mod sim;
