//! Core components of the `dorfyn` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`DorfynClient`] and its builder.
//! - The cookie/crumb session lifecycle and authenticated dispatch.
//! - The primary [`DorfynError`] type.

/// The main client (`DorfynClient`), builder, session and dispatch.
pub mod client;
/// The primary error type (`DorfynError`) for the crate.
pub mod error;
pub(crate) mod wire;

#[cfg(feature = "debug-dumps")]
pub(crate) mod dump;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::DorfynClient`
pub use client::{DorfynClient, DorfynClientBuilder, QueryParams, SessionCredential};
pub use error::{DorfynError, ErrorKind, RemoteError};
pub use wire::ApiError;
