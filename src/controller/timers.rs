//! Controller domain: deadline-based grace windows.

use super::state::Timestamp;

/// A time-bounded window stored as a single deadline.
///
/// Re-arming overwrites the deadline, so at most one window of a kind is ever live.
/// Open while `now < deadline`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraceWindow {
    deadline: Option<Timestamp>,
}

impl GraceWindow {
    pub fn arm(&mut self, now: Timestamp, length: f32) {
        self.deadline = Some(now.after(length));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_open(&self, now: Timestamp) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// Close the window, reporting whether it was still open.
    pub fn consume(&mut self, now: Timestamp) -> bool {
        let open = self.is_open(now);
        self.deadline = None;
        open
    }

    /// Drop an elapsed deadline. Returns true only on the call that observes the expiry.
    pub fn expire(&mut self, now: Timestamp) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Timestamp> {
        self.deadline
    }
}
