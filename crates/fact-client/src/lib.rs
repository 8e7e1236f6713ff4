//! Upstream fact client.
//!
//! Issues one bounded-timeout GET per lookup and classifies the result into a
//! [`domain::FactOutcome`]. Failures never escape as errors; they become
//! fallback outcomes and are logged.

pub mod error;
pub mod http;
pub mod memory;
pub mod source;

pub use error::FetchError;
pub use http::{DEFAULT_TIMEOUT, DEFAULT_URL, HttpFactSource, parse_fact};
pub use memory::InMemoryFactSource;
pub use source::FactSource;
