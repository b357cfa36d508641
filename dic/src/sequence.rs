/// Sequence number handed out with every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

impl LookupTicket {
    pub fn number(self) -> u64 {
        self.0
    }
}

/// Decides which lookup completion still deserves to be shown.
///
/// Only the most recently issued ticket is current, and it stops being
/// current once it has been accepted, so late and duplicate completions
/// are both dropped.
#[derive(Debug, Default)]
pub struct LookupSequencer {
    latest: u64,
    settled: bool,
}

impl LookupSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> LookupTicket {
        self.latest += 1;
        self.settled = false;
        LookupTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        // tickets start at 1, zero means nothing was issued yet
        self.latest != 0 && ticket.0 == self.latest && !self.settled
    }

    /// Returns true exactly once, for the latest ticket
    pub fn accept(&mut self, ticket: LookupTicket) -> bool {
        if self.is_current(ticket) {
            self.settled = true;
            true
        } else {
            false
        }
    }
}
