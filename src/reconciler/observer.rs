use log::{info, warn};

/// Observability hooks for one reconciliation run. The engine reports
/// through this instead of logging directly, so embedders can route
/// diagnostics wherever they like.
pub trait ReconcileObserver {
    fn standings_parsed(&self, entries: usize) {
        let _ = entries;
    }

    fn opponent_unmatched(&self, opponent: &str) {
        let _ = opponent;
    }

    fn rows_filled(&self, filled: usize) {
        let _ = filled;
    }
}

/// Default observer: forwards to the `log` macros.
pub struct LogObserver;

impl ReconcileObserver for LogObserver {
    fn standings_parsed(&self, entries: usize) {
        info!("Parsed standings entries: {}", entries);
    }

    fn opponent_unmatched(&self, opponent: &str) {
        warn!("Opponent not found in standings: {}", opponent);
    }

    fn rows_filled(&self, filled: usize) {
        info!("Rows filled: {}", filled);
    }
}

/// Observer that drops everything; handy for tests and embedders that do
/// their own counting.
pub struct NullObserver;

impl ReconcileObserver for NullObserver {}
