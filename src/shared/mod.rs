//! Cross-cutting concerns shared by wiring and use cases.

pub mod config;

pub use config::AppConfig;
