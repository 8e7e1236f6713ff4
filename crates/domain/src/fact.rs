//! Outcome of an upstream fact lookup and its fallback text.

/// Fact text used when the upstream call timed out.
pub const TIMEOUT_FALLBACK: &str = "Cat fact temporarily unavailable";

/// Fact text used when the upstream call failed for any other reason.
pub const UNAVAILABLE_FALLBACK: &str = "Cat fact unavailable";

/// Fact text used when the upstream body has no `fact` field.
pub const MISSING_FALLBACK: &str = "No fact available";

/// Result of a single fact lookup.
///
/// The three non-`Found` variants are distinct on purpose: each one maps to
/// its own fallback text in [`FactOutcome::into_fact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactOutcome {
    /// Upstream returned a fact.
    Found(String),
    /// Upstream answered with a JSON object that has no fact.
    Missing,
    /// Upstream did not answer within the configured timeout.
    TimedOut,
    /// Network error, bad status or malformed body.
    Unavailable,
}

impl FactOutcome {
    /// Short label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            FactOutcome::Found(_) => "found",
            FactOutcome::Missing => "missing",
            FactOutcome::TimedOut => "timeout",
            FactOutcome::Unavailable => "unavailable",
        }
    }

    /// Returns `true` if upstream produced a fact.
    pub fn is_found(&self) -> bool {
        matches!(self, FactOutcome::Found(_))
    }

    /// Converts the outcome into the fact text served to clients.
    pub fn into_fact(self) -> String {
        match self {
            FactOutcome::Found(fact) => fact,
            FactOutcome::Missing => MISSING_FALLBACK.to_string(),
            FactOutcome::TimedOut => TIMEOUT_FALLBACK.to_string(),
            FactOutcome::Unavailable => UNAVAILABLE_FALLBACK.to_string(),
        }
    }
}

impl std::fmt::Display for FactOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
