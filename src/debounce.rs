//! Cancellable delayed triggers.
//!
//! A [`Debouncer`] owns at most one pending timer. Scheduling again aborts the
//! previous timer, so a burst of triggers collapses into one message sent
//! `delay` after the last of them. The timer does not run the action itself:
//! it posts a message carrying its [`DebounceToken`] back to the event loop,
//! which must call [`Debouncer::fire`] and act only if that returns `true`.
//! This makes "cancel before fire" deterministic even when the timer already
//! elapsed and its message is sitting in the queue.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Quiet period before a crash search is issued (milliseconds).
pub const CRASH_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Identifies one scheduled trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceToken(u64);

#[derive(Debug)]
struct Pending {
    token: DebounceToken,
    timer: Option<JoinHandle<()>>,
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    next_token: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_token: 0,
            pending: None,
        }
    }

    /// Debouncer for the crash search inputs.
    pub fn crash_search() -> Self {
        Self::new(Duration::from_millis(CRASH_SEARCH_DEBOUNCE_MS))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the timer. After `delay` without another call, the message
    /// built by `make` is sent on `tx`.
    ///
    /// Without a tokio runtime no timer is started; the token is still
    /// pending and can be fired by hand.
    pub fn schedule<M, F>(&mut self, tx: &UnboundedSender<M>, make: F) -> DebounceToken
    where
        M: Send + 'static,
        F: FnOnce(DebounceToken) -> M + Send + 'static,
    {
        self.cancel();

        self.next_token += 1;
        let token = DebounceToken(self.next_token);
        let delay = self.delay;
        let tx = tx.clone();

        let timer = tokio::runtime::Handle::try_current().ok().map(|handle| {
            handle.spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(make(token));
            })
        });

        self.pending = Some(Pending { token, timer });
        token
    }

    /// Drop the pending trigger, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                if let Some(timer) = pending.timer {
                    timer.abort();
                }
                true
            }
            None => false,
        }
    }

    /// Consume `token` if it is still the pending one.
    ///
    /// Returns `false` for a token that was superseded or cancelled; the
    /// caller must then ignore the trigger.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        match &self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_token() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::crash_search();

        let mut last = None;
        for _ in 0..5 {
            last = Some(debouncer.schedule(&tx, |t| t));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(300)).await;
        let fired = rx.recv().await.unwrap();
        assert_eq!(Some(fired), last);
        assert!(rx.try_recv().is_err());
        assert!(debouncer.fire(fired));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_before_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::crash_search();
        debouncer.schedule(&tx, |t| t);

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_wins_over_queued_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::crash_search();
        debouncer.schedule(&tx, |t| t);

        tokio::time::sleep(Duration::from_millis(350)).await;
        let queued = rx.recv().await.unwrap();

        assert!(debouncer.cancel());
        assert!(!debouncer.fire(queued));
    }

    #[test]
    fn test_superseded_token_is_rejected_without_runtime() {
        let (tx, _rx) = mpsc::unbounded_channel::<DebounceToken>();
        let mut debouncer = Debouncer::crash_search();
        let first = debouncer.schedule(&tx, |t| t);
        let second = debouncer.schedule(&tx, |t| t);

        assert_ne!(first, second);
        assert!(!debouncer.fire(first));
        assert!(debouncer.fire(second));
        assert!(!debouncer.fire(second));
    }
}
