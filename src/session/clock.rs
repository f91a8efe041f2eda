//! Turn clock with a pending-pass deadline.
//!
//! The clock turns wall-clock time into an ordered stream of
//! `ClockEvent`s: a pass comes due when its feedback delay runs out, and a
//! second elapses at every whole-second boundary. A pass still pending when
//! a second elapses is settled first, so it never outlives the next tick.

use std::time::Duration;

use smallvec::SmallVec;

const SECOND: Duration = Duration::from_secs(1);

/// Something the clock says happened, in chronological order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockEvent {
    /// The pending pass is due.
    PassDue,
    /// A whole second elapsed.
    SecondElapsed,
}

/// Single time source for a session.
#[derive(Clone, Debug)]
pub struct TurnClock {
    running: bool,
    until_second: Duration,
    pending_pass: Option<Duration>,
    generation: u64,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnClock {
    /// Create a stopped clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: false,
            until_second: SECOND,
            pending_pass: None,
            generation: 0,
        }
    }

    /// (Re)start the clock from a fresh second, dropping any pending pass.
    pub fn start(&mut self) {
        self.running = true;
        self.until_second = SECOND;
        self.pending_pass = None;
        self.generation += 1;
    }

    /// Stop the clock and drop any pending pass.
    pub fn stop(&mut self) {
        self.running = false;
        self.pending_pass = None;
    }

    /// Check if the clock is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// How many times the clock has been started.
    ///
    /// Hosts can compare generations to tell a restarted timer apart.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if a pass is waiting for its deadline.
    #[must_use]
    pub fn is_pass_pending(&self) -> bool {
        self.pending_pass.is_some()
    }

    /// Schedule a pass `delay` from now.
    pub fn schedule_pass(&mut self, delay: Duration) {
        self.pending_pass = Some(delay);
    }

    /// Remove the pending pass, reporting whether there was one.
    pub fn take_pass(&mut self) -> bool {
        self.pending_pass.take().is_some()
    }

    /// Let `elapsed` pass and report what happened, oldest first.
    ///
    /// A stopped clock reports nothing.
    pub fn advance(&mut self, elapsed: Duration) -> SmallVec<[ClockEvent; 4]> {
        let mut out = SmallVec::new();
        if !self.running {
            return out;
        }

        let mut remaining = elapsed;
        loop {
            match self.pending_pass {
                Some(due) if due <= self.until_second && due <= remaining => {
                    remaining -= due;
                    self.until_second -= due;
                    self.pending_pass = None;
                    out.push(ClockEvent::PassDue);
                }
                _ if self.until_second <= remaining => {
                    remaining -= self.until_second;
                    self.until_second = SECOND;
                    if self.pending_pass.take().is_some() {
                        out.push(ClockEvent::PassDue);
                    }
                    out.push(ClockEvent::SecondElapsed);
                }
                _ => {
                    self.until_second -= remaining;
                    if let Some(due) = self.pending_pass.as_mut() {
                        *due -= remaining;
                    }
                    break;
                }
            }
        }
        out
    }
}
