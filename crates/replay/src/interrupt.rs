use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide stop request, raised by SIGINT/SIGTERM.
///
/// The signal side only ever stores `true`; the replay loop polls the flag
/// once per line, so a line that has started decoding is always finished.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Register the Ctrl-C / termination handler. Can only succeed once per process.
    pub fn install(&self) -> Result<(), ctrlc::Error> {
        let flag = Arc::clone(&self.0);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
    }
}
