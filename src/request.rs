//! Guarding against stale responses.
//!
//! Every fetch is tagged with a [`Ticket`] for its [`Channel`]. Issuing a new
//! ticket on a channel makes all older tickets on it stale, and
//! [`RequestTracker::complete`] tells the caller whether a result may still
//! be applied. The tracker also counts requests in flight, stale or not, so
//! the UI knows when everything it started has come back.

use std::collections::HashMap;

/// Independent streams of requests. A new request on one channel never
/// invalidates another channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The distinct user list loaded at boot.
    Users,
    /// The loader of the current view.
    View,
    /// Crash list plus signature summary.
    CrashSearch,
    /// The Visuals chart set.
    Charts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    channel: Channel,
    seq: u64,
}

impl Ticket {
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    next_seq: u64,
    current: HashMap<Channel, u64>,
    in_flight: usize,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// New ticket for `channel`; older tickets on it become stale.
    pub fn issue(&mut self, channel: Channel) -> Ticket {
        self.next_seq += 1;
        self.current.insert(channel, self.next_seq);
        Ticket {
            channel,
            seq: self.next_seq,
        }
    }

    /// Make every outstanding ticket on `channel` stale.
    pub fn invalidate(&mut self, channel: Channel) {
        self.current.remove(&channel);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get(&ticket.channel) == Some(&ticket.seq)
    }

    /// Record one request sent under some ticket.
    pub fn started(&mut self) {
        self.in_flight += 1;
    }

    /// Record one request finished. Returns whether its result may be applied.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        let current = self.is_current(ticket);
        if !current {
            tracing::debug!(channel = ?ticket.channel, seq = ticket.seq, "dropping stale response");
        }
        current
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(Channel::CrashSearch);
        let second = tracker.issue(Channel::CrashSearch);
        tracker.started();
        tracker.started();

        assert!(!tracker.complete(first));
        assert!(tracker.complete(second));
        assert!(tracker.is_idle());
    }

    #[test]
    fn test_channels_are_independent() {
        let mut tracker = RequestTracker::new();
        let view = tracker.issue(Channel::View);
        let charts = tracker.issue(Channel::Charts);
        tracker.issue(Channel::View);

        assert!(!tracker.is_current(view));
        assert!(tracker.is_current(charts));

        tracker.invalidate(Channel::Charts);
        assert!(!tracker.is_current(charts));
    }

    #[test]
    fn test_in_flight_never_underflows() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue(Channel::View);
        assert!(tracker.complete(ticket));
        assert_eq!(tracker.in_flight(), 0);
    }
}
