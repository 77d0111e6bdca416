//! Batch progress reporting
//!
//! The orchestrator reports `(index + 1, total)` before processing each
//! item, so observers can show "3 / 12" while the third call is in flight.

use tokio::sync::mpsc;

/// Aggregate progress of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// 1-based index of the item about to be processed
    pub current: usize,
    /// Total items in the batch
    pub total: usize,
}

/// Observer for batch progress
pub trait ProgressSink: Send + Sync {
    /// Called before each item is processed
    fn progress(&self, current: usize, total: usize);
}

/// Sink that discards progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&self, _current: usize, _total: usize) {}
}

/// Sink that forwards progress over an unbounded channel
///
/// Send failures are ignored: a dropped receiver must not disturb the run.
#[derive(Debug, Clone)]
pub struct ChannelProgress {
    sender: mpsc::UnboundedSender<BatchProgress>,
}

impl ChannelProgress {
    /// Create a sink and its receiving end
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<BatchProgress>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ProgressSink for ChannelProgress {
    fn progress(&self, current: usize, total: usize) {
        let _ = self.sender.send(BatchProgress { current, total });
    }
}
