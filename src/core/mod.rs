//! Core components of the `financelite` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`FinClient`] and its builder.
//! - The primary [`FinError`] type.
//! - Internal networking helpers.

/// The main client (`FinClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FinError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FinClient`
pub use client::{FinClient, FinClientBuilder};
pub use error::FinError;
