//! `CallRegistry` — pending calls keyed by their scheduled tick.
//!
//! Calls are inert until their tick arrives; each tick the simulation drains
//! only the calls scheduled for that exact tick, so the per-tick cost is
//! O(due calls), not O(all pending calls).
//!
//! # Strict tick equality
//!
//! `release_due(now)` matches `scheduled_tick == now`, not `<=`.  Since the
//! tick loop visits every tick in order this releases everything — but a
//! call scheduled in the past at insertion time is stranded forever.  That
//! quirk is inherited deliberately from the system being modeled; the
//! simulation's tick ceiling turns such runs into a `DidNotTerminate` error
//! rather than a hang.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::CallEvent;

/// Pending calls, ordered by scheduled tick, insertion-ordered within one.
#[derive(Default)]
pub struct CallRegistry {
    inner: BTreeMap<Tick, Vec<CallEvent>>,
    /// Cached total call count for O(1) `len()`.
    total: usize,
}

impl CallRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a call script.  No ordering requirement on the
    /// input; the map buckets by tick.
    pub fn from_calls(calls: impl IntoIterator<Item = CallEvent>) -> Self {
        let mut registry = Self::new();
        for call in calls {
            registry.push(call);
        }
        registry
    }

    /// Register `call` under its scheduled tick.
    pub fn push(&mut self, call: CallEvent) {
        self.inner.entry(call.scheduled_tick).or_default().push(call);
        self.total += 1;
    }

    /// Remove and return all calls scheduled for exactly `tick`, in the order
    /// they were registered.
    ///
    /// Returns an empty vec if nothing is due (the common case; `Vec::new`
    /// does not allocate).
    pub fn release_due(&mut self, tick: Tick) -> Vec<CallEvent> {
        match self.inner.remove(&tick) {
            None => Vec::new(),
            Some(calls) => {
                self.total -= calls.len();
                calls
            }
        }
    }

    /// The earliest tick with at least one pending call, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total pending calls across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one pending call.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
