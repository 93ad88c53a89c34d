//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::output::print_warning;

/// A single cooperative interrupt flag.
///
/// Set once by the Ctrl-C handler and polled only between records, so an
/// in-flight download always runs to completion before cancellation takes
/// effect.
#[derive(Debug, Clone, Default)]
pub struct CancellationGate {
    flag: Arc<AtomicBool>,
}

impl CancellationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Arm the gate on Ctrl-C. The handler only sets the flag; the orchestrator
/// decides when to stop.
pub fn install_ctrl_c_handler(gate: &CancellationGate) {
    let gate = gate.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            print_warning("Interrupt received, stopping after the current download...");
            gate.cancel();
        }
    });
}
