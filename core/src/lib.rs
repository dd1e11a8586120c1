//! Core components for Azure Storage account SAS signing.
//!
//! This crate provides the service-agnostic building blocks shared by the
//! azsas service crates.
//!
//! ## Overview
//!
//! - **Error**: a single error type carrying an [`ErrorKind`], so callers can
//!   tell a malformed connection string from a bad account key.
//! - **Env**: an abstraction over environment variables, used by
//!   configuration loaders and swapped for [`StaticEnv`] in tests.
//!
//! ## Example
//!
//! ```
//! use azsas_core::hash::{base64_decode, base64_hmac_sha256};
//!
//! # fn main() -> azsas_core::Result<()> {
//! let key = base64_decode("a2V5")?;
//! let sig = base64_hmac_sha256(&key, b"string to sign\n");
//! assert_eq!(sig.len(), 44);
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: base64 and HMAC-SHA256 helpers
//! - [`time`]: ISO 8601 formatting for SAS start and expiry times
//! - [`utils`]: general utilities including secret redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::{Env, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
