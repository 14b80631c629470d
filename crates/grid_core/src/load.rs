//! Request tokens for page loads.
//!
//! Each load is issued a sequence number. Only the most recently issued load
//! may apply its rows or clear the loading flag; anything older that settles
//! afterwards is stale and dropped.

use shared::domain::PageNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    seq: u64,
    page: PageNumber,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn page(&self) -> PageNumber {
        self.page
    }
}

/// What happened to a settled load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadDisposition {
    /// Rows replaced and selection cleared.
    Applied { rows: usize },
    /// Fetch failed; rows untouched.
    Failed,
    /// A newer load was issued after this one.
    Stale,
}

#[derive(Debug, Default)]
pub(crate) struct LoadSequence {
    latest: u64,
    pending: bool,
}

impl LoadSequence {
    pub(crate) fn issue(&mut self, page: PageNumber) -> LoadTicket {
        self.latest += 1;
        self.pending = true;
        LoadTicket {
            seq: self.latest,
            page,
        }
    }

    /// Marks `ticket` settled. Returns false when the ticket is not the latest
    /// outstanding load.
    pub(crate) fn settle(&mut self, ticket: LoadTicket) -> bool {
        if !self.pending || ticket.seq != self.latest {
            return false;
        }
        self.pending = false;
        true
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn latest(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase() {
        let mut loads = LoadSequence::default();
        let first = loads.issue(PageNumber::FIRST);
        let second = loads.issue(PageNumber::FIRST.next());
        assert!(second.seq() > first.seq());
        assert_eq!(loads.latest(), second.seq());
    }

    #[test]
    fn only_latest_ticket_settles_once() {
        let mut loads = LoadSequence::default();
        let first = loads.issue(PageNumber::FIRST);
        let second = loads.issue(PageNumber::FIRST.next());

        assert!(!loads.settle(first));
        assert!(loads.is_pending());
        assert!(loads.settle(second));
        assert!(!loads.is_pending());
        assert!(!loads.settle(second));
    }
}
