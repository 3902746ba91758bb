//! Infrastructure layer - External I/O and persistence

pub mod config;

pub use config::Config;
