//! Cancellation seam polled between operations.
//!
//! Cancellation never interrupts a running operation; the executor checks
//! the probe before each operation and a cancelled run halts exactly like
//! an operation failure, so the session rolls back the completed prefix.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled by the executor before each operation; `true` halts the run.
pub trait CancelProbe: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Shared-flag probe for hosts that cancel from another thread. Clones
/// share the flag, so the host keeps one clone and hands the other to the
/// engine.
#[derive(Clone, Debug, Default)]
pub struct FlagCancelProbe {
    flag: Arc<AtomicBool>,
}

impl FlagCancelProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl CancelProbe for FlagCancelProbe {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let probe = FlagCancelProbe::new();
        let engine_side = probe.clone();
        assert!(!engine_side.is_cancelled());
        probe.cancel();
        assert!(engine_side.is_cancelled());
    }
}
