//! Profile response building.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::profile::Profile;

/// Body of a successful `/me` response.
///
/// Keys are emitted in declaration order: `status`, `user`, `timestamp`,
/// `fact`. Do not reorder the fields.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse<'a> {
    pub status: &'static str,
    pub user: &'a Profile,
    pub timestamp: String,
    pub fact: String,
}

impl<'a> ProfileResponse<'a> {
    /// Creates a response for the given profile, fact and request time.
    pub fn new(profile: &'a Profile, fact: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            status: "success",
            user: profile,
            timestamp: format_timestamp(now),
            fact: fact.into(),
        }
    }

    /// Serializes the response as compact JSON.
    ///
    /// Non-ASCII text is written as UTF-8, not as `\u` escapes.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builds and serializes the `/me` payload.
pub fn build_profile_response(
    profile: &Profile,
    fact: impl Into<String>,
    now: DateTime<Utc>,
) -> Result<String> {
    ProfileResponse::new(profile, fact, now).to_json()
}

/// Formats a UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
