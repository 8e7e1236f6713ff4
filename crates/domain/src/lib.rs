//! Domain layer for the profile service.
//!
//! This crate provides the pieces of a `/me` response that do not involve I/O:
//! - `Profile`, the immutable identity record loaded at startup
//! - `FactOutcome`, the result of a fact lookup and its fallback text
//! - the profile response builder with fixed key order

pub mod error;
pub mod fact;
pub mod profile;
pub mod response;

pub use error::DomainError;
pub use fact::{FactOutcome, MISSING_FALLBACK, TIMEOUT_FALLBACK, UNAVAILABLE_FALLBACK};
pub use profile::{Profile, ProfileField};
pub use response::{ProfileResponse, build_profile_response, format_timestamp};
