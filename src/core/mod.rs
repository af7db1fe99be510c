//! Core components of the `tdameritrade-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`TdClient`] and its builder.
//! - The primary [`TdError`] type.
//! - Internal networking and decode helpers shared by the API modules.

/// The main client (`TdClient`), builder, and endpoint configuration.
pub mod client;
/// The primary error type (`TdError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::TdClient`
pub use client::{TdClient, TdClientBuilder};
pub use error::TdError;
