//! Pure tier engine - one tick in, one snapshot out

use super::clock::WaitlistNudge;
use super::{CountdownSnapshot, Tier};
use chrono::{DateTime, Utc};

/// Tick-driven tier state for a single session view
///
/// Closure is latched: once a tick observes `RoomClosed`, every later tick
/// reports it too, regardless of what the clock does. The waitlist count
/// never decreases, never exceeds the cap, and freezes once the session is
/// live or closed.
#[derive(Debug)]
pub struct TierEngine {
    start_time: DateTime<Utc>,
    waiting_count: u32,
    waitlist_cap: u32,
    closed: bool,
}

impl TierEngine {
    pub fn new(start_time: DateTime<Utc>, initial_waitlist: u32, waitlist_cap: u32) -> Self {
        Self {
            start_time,
            waiting_count: initial_waitlist.min(waitlist_cap),
            waitlist_cap,
            closed: false,
        }
    }

    /// Advance one tick
    ///
    /// `now` is sampled exactly once by the caller; every field of the
    /// returned snapshot derives from that one sample.
    pub fn tick(&mut self, now: DateTime<Utc>, nudge: &mut dyn WaitlistNudge) -> CountdownSnapshot {
        let mut remaining_seconds = (self.start_time - now).num_seconds();

        let tier = if self.closed {
            Tier::RoomClosed
        } else {
            let tier = Tier::classify(remaining_seconds);
            if tier == Tier::RoomClosed {
                self.closed = true;
            }
            tier
        };

        if self.closed {
            remaining_seconds = remaining_seconds.min(0);
        } else if tier != Tier::LiveNow && nudge.nudge() {
            self.waiting_count = (self.waiting_count + 1).min(self.waitlist_cap);
        }

        CountdownSnapshot {
            remaining_seconds,
            tier,
            join_enabled: tier.join_enabled(),
            waiting_count: self.waiting_count,
        }
    }

    /// Whether closure has been observed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Current waitlist count
    pub fn waiting_count(&self) -> u32 {
        self.waiting_count
    }
}
