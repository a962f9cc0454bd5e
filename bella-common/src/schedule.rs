//! Cancellable deferred work
//!
//! The reservation form clears its status banner some time after a
//! successful submission. The timer itself belongs to the platform (a
//! browser timeout in the UI), so this module only tracks the handle and
//! makes sure it is cancelled when its owner goes away.

/// Handle of a scheduled one-shot callback
pub trait TimerHandle {
    /// Prevent the callback from running; no effect once it has fired
    fn cancel(self);
}

/// Slot holding at most one pending status clear
#[derive(Debug)]
pub struct PendingClear<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> Default for PendingClear<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TimerHandle> PendingClear<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Track a newly scheduled clear, cancelling the one it supersedes
    pub fn arm(&mut self, handle: H) {
        if let Some(previous) = self.handle.replace(handle) {
            tracing::debug!("superseding pending status clear");
            previous.cancel();
        }
    }

    /// Forget the handle after its callback ran
    pub fn fired(&mut self) {
        self.handle = None;
    }

    /// Cancel whatever is pending
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!("cancelling pending status clear");
            handle.cancel();
        }
    }
}

impl<H: TimerHandle> Drop for PendingClear<H> {
    fn drop(&mut self) {
        self.release();
    }
}
