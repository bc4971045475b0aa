//! Scoped phase timing for generation rounds.
//!
//! The trace context is passed explicitly through the round rather than held
//! in a global. Depth lives in a [`Cell`], so the context is deliberately not
//! `Sync`; a parallelized round would need one context per worker.

use std::cell::Cell;
use std::time::Instant;

/// Elapsed-time tracing for the major generation phases.
///
/// When disabled, [`scope`](PerfTrace::scope) runs its block with no other
/// work. When enabled, each scope logs its elapsed time on exit, indented two
/// spaces per nesting level, innermost scopes first.
#[derive(Debug)]
pub struct PerfTrace {
    enabled: bool,
    depth: Cell<usize>,
}

impl PerfTrace {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            depth: Cell::new(0),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run `block`, logging its elapsed time when tracing is enabled.
    pub fn scope<T>(&self, name: &str, block: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return block();
        }

        let started = Instant::now();
        self.depth.set(self.depth.get() + 1);
        let result = block();
        self.depth.set(self.depth.get() - 1);

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let indent = "  ".repeat(self.depth.get());
        tracing::info!("{indent}==PERFORMANCE== `{name}` took {elapsed_ms:.3} msec");
        result
    }
}
