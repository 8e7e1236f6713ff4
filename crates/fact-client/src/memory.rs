//! In-memory fact source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::FactOutcome;

use crate::source::FactSource;

/// Returns a configurable outcome and counts calls.
#[derive(Debug, Clone)]
pub struct InMemoryFactSource {
    outcome: Arc<RwLock<FactOutcome>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryFactSource {
    /// Creates a source that always returns `outcome`.
    pub fn new(outcome: FactOutcome) -> Self {
        Self {
            outcome: Arc::new(RwLock::new(outcome)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a source that always finds the given fact.
    pub fn with_fact(fact: impl Into<String>) -> Self {
        Self::new(FactOutcome::Found(fact.into()))
    }

    /// Replaces the outcome returned by subsequent calls.
    pub fn set_outcome(&self, outcome: FactOutcome) {
        *self.outcome.write().unwrap() = outcome;
    }

    /// Returns the number of `fetch` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FactSource for InMemoryFactSource {
    async fn fetch(&self) -> FactOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.read().unwrap().clone()
    }
}
