/// Hands out tickets for in-flight fetches so that only the most recent
/// submit gets to update the calendar.
///
/// Requests are never cancelled; a superseded response is simply dropped
/// when it arrives.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    /// Start a new request, superseding any that are still outstanding.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest = self.latest.wrapping_add(1);
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
