//! Run-level failure counters.

use std::collections::HashMap;
use std::sync::Mutex;

use log::{info, warn};
use strum::IntoEnumIterator;

use super::ErrorType;

/// Counts non-fatal failures across the run.
///
/// Shared between concurrent domain tasks; incremented wherever a lookup or
/// API call fails and summarized once at the end of the run.
#[derive(Debug, Default)]
pub struct LookupStats {
    counts: Mutex<HashMap<ErrorType, usize>>,
}

impl LookupStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self, error_type: ErrorType) {
        let mut counts = self.counts.lock().expect("stats mutex poisoned");
        *counts.entry(error_type).or_insert(0) += 1;
    }

    pub fn count(&self, error_type: ErrorType) -> usize {
        let counts = self.counts.lock().expect("stats mutex poisoned");
        counts.get(&error_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        let counts = self.counts.lock().expect("stats mutex poisoned");
        counts.values().sum()
    }
}

/// Logs a one-line-per-category failure summary at the end of a run.
pub fn print_lookup_statistics(stats: &LookupStats) {
    if stats.total() == 0 {
        info!("All lookups completed without transport errors");
        return;
    }
    for error_type in ErrorType::iter() {
        let count = stats.count(error_type);
        if count > 0 {
            warn!("{}: {}", error_type, count);
        }
    }
}
