//! Core components: the HTTP client, the error type and shared models.

/// The main client (`SinaClient`) and its builder.
pub mod client;
/// The primary error type (`KlineError`) for the crate.
pub mod error;
/// Shared data models (`Candle`, `Period`).
pub mod models;

// convenient re-exports so most code can just `use crate::core::SinaClient`
pub use client::{SinaClient, SinaClientBuilder};
pub use error::KlineError;
pub use models::{Candle, Period};
