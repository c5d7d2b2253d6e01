//! Stale-response protection for the data-source boundary.

use tracing::debug;

/// Sequence number stamped onto one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Raw sequence value, for logging.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues request sequence numbers and decides which responses to keep.
///
/// Every dispatched fetch gets a fresh, strictly increasing number. A
/// response is only applied when it is newer than everything applied so
/// far; anything else is stale and dropped, so a slow early fetch can
/// never overwrite rows delivered by a later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchTickets {
    issued: u64,
    applied: u64,
}

impl FetchTickets {
    /// Fresh ticket counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the next outgoing request.
    pub fn issue(&mut self) -> RequestSeq {
        self.issued += 1;
        RequestSeq(self.issued)
    }

    /// Decide whether a completed request may be applied. Newer than
    /// everything applied so far: yes, and it becomes the new high-water
    /// mark. Otherwise the response is stale.
    pub fn accept(&mut self, seq: RequestSeq) -> bool {
        if seq.0 > self.applied {
            self.applied = seq.0;
            true
        } else {
            debug!(
                seq = seq.0,
                applied = self.applied,
                "Dropping stale fetch response"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_is_strictly_increasing() {
        let mut tickets = FetchTickets::new();
        let a = tickets.issue();
        let b = tickets.issue();
        assert!(b > a);
    }

    #[test]
    fn in_order_responses_are_accepted() {
        let mut tickets = FetchTickets::new();
        let a = tickets.issue();
        let b = tickets.issue();
        assert!(tickets.accept(a));
        assert!(tickets.accept(b));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut tickets = FetchTickets::new();
        let slow = tickets.issue();
        let fast = tickets.issue();
        // The later request resolves first.
        assert!(tickets.accept(fast));
        assert!(!tickets.accept(slow), "older response must be dropped");
    }

    #[test]
    fn duplicate_response_is_dropped() {
        let mut tickets = FetchTickets::new();
        let seq = tickets.issue();
        assert!(tickets.accept(seq));
        assert!(!tickets.accept(seq));
    }
}
