use super::Stats;
use crate::StrError;
use std::sync::Mutex;

/// Receives diagnostics from the creep stress-update
///
/// All functions default to no-ops. Implementations must be thread-safe because
/// integration points are updated in parallel.
pub trait Observer: Send + Sync {
    /// Called after a converged radial return
    fn converged(&self, _point: usize, _delta: f64, _stats: &Stats) {}

    /// Called when the fallback safeguard replaced a degenerate increment
    fn fallback(&self, _point: usize, _delta: f64, _stats: &Stats) {}

    /// Called when the radial return failed
    fn failed(&self, _point: usize, _error: StrError, _stats: &Stats) {}
}

/// Ignores all diagnostics
pub struct NoObserver;

impl Observer for NoObserver {}

/// Forwards diagnostics to the `tracing` ecosystem
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn converged(&self, point: usize, delta: f64, stats: &Stats) {
        tracing::debug!(
            point,
            delta,
            n_iterations = stats.n_iterations,
            n_bisections = stats.n_bisections,
            residual = stats.residual,
            "radial return converged"
        );
    }

    fn fallback(&self, point: usize, delta: f64, stats: &Stats) {
        tracing::warn!(point, delta, residual = stats.residual, "degenerate increment replaced by fallback");
    }

    fn failed(&self, point: usize, error: StrError, stats: &Stats) {
        tracing::error!(
            point,
            error,
            n_iterations = stats.n_iterations,
            residual = stats.residual,
            "radial return failed"
        );
    }
}

/// Records the diagnostics in memory (e.g., for testing)
pub struct RecordingObserver {
    /// Holds (point, number of iterations) of converged updates
    pub converged: Mutex<Vec<(usize, usize)>>,

    /// Holds the points where the fallback safeguard was activated
    pub fallback: Mutex<Vec<usize>>,

    /// Holds (point, error) of failed updates
    pub failed: Mutex<Vec<(usize, StrError)>>,
}

impl RecordingObserver {
    /// Allocates a new instance
    pub fn new() -> Self {
        RecordingObserver {
            converged: Mutex::new(Vec::new()),
            fallback: Mutex::new(Vec::new()),
            failed: Mutex::new(Vec::new()),
        }
    }
}

impl Observer for RecordingObserver {
    fn converged(&self, point: usize, _delta: f64, stats: &Stats) {
        if let Ok(mut list) = self.converged.lock() {
            list.push((point, stats.n_iterations));
        }
    }

    fn fallback(&self, point: usize, _delta: f64, _stats: &Stats) {
        if let Ok(mut list) = self.fallback.lock() {
            list.push(point);
        }
    }

    fn failed(&self, point: usize, error: StrError, _stats: &Stats) {
        if let Ok(mut list) = self.failed.lock() {
            list.push((point, error));
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
