/// Cooperative cancellation for a single playback run.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable stop flag. Cancelling is one-way and idempotent; the
/// playback loop only observes it at its checkpoints.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns true if both tokens share the same flag.
    pub fn same_as(&self, other: &CancellationToken) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// The places where playback polls its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    BeforeScene { scene: usize },
    BeforeLine { scene: usize, line: usize },
    BeforePrompt { scene: usize, prompt: usize },
}

impl Checkpoint {
    /// Returns true if playback may continue past this checkpoint.
    pub fn pass(&self, token: &CancellationToken) -> bool {
        if token.is_cancelled() {
            tracing::debug!(checkpoint = ?self, "Performance cancelled at checkpoint");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
        assert!(token.same_as(&clone));
    }

    #[test]
    fn cancel_is_idempotent() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn separate_tokens_are_independent() {
        let a = CancellationToken::new();
        let b = CancellationToken::new();
        a.cancel();
        assert!(!b.is_cancelled());
        assert!(!a.same_as(&b));
    }

    #[test]
    fn checkpoints_pass_until_cancelled() {
        let token = CancellationToken::new();
        let checkpoints = [
            Checkpoint::BeforeScene { scene: 0 },
            Checkpoint::BeforeLine { scene: 0, line: 2 },
            Checkpoint::BeforePrompt { scene: 1, prompt: 0 },
        ];
        assert!(checkpoints.iter().all(|c| c.pass(&token)));
        token.cancel();
        assert!(checkpoints.iter().all(|c| !c.pass(&token)));
    }
}
