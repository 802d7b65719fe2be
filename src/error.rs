//! Error types and result handling for pgoutput-listener.
//!
//! Building or mutating a [`ListenerOptions`](crate::ListenerOptions) never
//! fails. Errors only come from loading options from a file with environment
//! overrides, or from JSON.
//!
//! # Example
//!
//! ```rust
//! use pgoutput_listener::{Error, ListenerOptions, Result};
//!
//! fn load() -> Result<ListenerOptions> {
//!     ListenerOptions::from_json("{}")
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(Error::Serialization(e)) => eprintln!("Bad JSON: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for pgoutput-listener operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Layered file/environment configuration could not be built or
    /// deserialized, e.g. a required identifier is missing.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON encoding or decoding of the options failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A convenient Result type alias for pgoutput-listener operations.
///
/// This is equivalent to `std::result::Result<T, pgoutput_listener::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
