//! Live countdown classification - tiers, directives, snapshots
//!
//! A session's urgency tier is derived purely from its start time and the
//! current time, recomputed every tick. Only the tier identity and the
//! join-enabled flag are behaviorally meaningful; the style directives are
//! opaque rendering data.

mod clock;
mod engine;
mod watcher;

pub use clock::{Clock, RandomNudge, SystemClock, WaitlistNudge};
pub use engine::TierEngine;
pub use watcher::{CountdownEvent, CountdownWatcher};

use serde::{Deserialize, Serialize};

/// Seconds of lead time at or below which the room reads as live
pub const LIVE_NOW_WINDOW_SECS: i64 = 120;

/// Upper bound of the final-minutes band
pub const FINAL_MINUTES_WINDOW_SECS: i64 = 360;

/// Upper bound of the going-live band
pub const GOING_LIVE_WINDOW_SECS: i64 = 600;

/// Discrete urgency tier derived from time-to-start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    ComingSoon,
    GoingLive,
    FinalMinutes,
    LiveNow,
    RoomClosed,
}

impl Tier {
    /// Classify a remaining-seconds value; the first matching band wins
    pub fn classify(remaining_seconds: i64) -> Self {
        if remaining_seconds <= 0 {
            Tier::RoomClosed
        } else if remaining_seconds <= LIVE_NOW_WINDOW_SECS {
            Tier::LiveNow
        } else if remaining_seconds <= FINAL_MINUTES_WINDOW_SECS {
            Tier::FinalMinutes
        } else if remaining_seconds <= GOING_LIVE_WINDOW_SECS {
            Tier::GoingLive
        } else {
            Tier::ComingSoon
        }
    }

    /// Whether joining is allowed in this tier
    pub fn join_enabled(&self) -> bool {
        !matches!(self, Tier::RoomClosed)
    }

    /// Fixed rendering directives for this tier
    pub fn style(&self) -> &'static TierStyle {
        match self {
            Tier::RoomClosed => &ROOM_CLOSED_STYLE,
            Tier::LiveNow => &LIVE_NOW_STYLE,
            Tier::FinalMinutes => &FINAL_MINUTES_STYLE,
            Tier::GoingLive => &GOING_LIVE_STYLE,
            Tier::ComingSoon => &COMING_SOON_STYLE,
        }
    }
}

/// Rendering directives attached to a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierStyle {
    /// Status badge text
    pub label: &'static str,

    /// Accent color
    pub color: &'static str,

    /// Glow shadow color
    pub glow: &'static str,

    /// CSS animation directive
    pub animation: &'static str,

    /// Call-to-action button text
    pub cta: &'static str,

    /// Urgency line under the timer
    pub urgency: &'static str,
}

static ROOM_CLOSED_STYLE: TierStyle = TierStyle {
    label: "🏁 ROOM CLOSED",
    color: "#64748b",
    glow: "rgba(100, 116, 139, 0.2)",
    animation: "none",
    cta: "SESSION COMPLETED",
    urgency: "Room is now closed",
};

static LIVE_NOW_STYLE: TierStyle = TierStyle {
    label: "🔴 LIVE NOW",
    color: "#FF1744",
    glow: "rgba(255, 23, 108, 0.8)",
    animation: "urgentFlash 0.5s ease-in-out infinite",
    cta: "JOIN NOW!",
    urgency: "STARTING NOW!",
};

static FINAL_MINUTES_STYLE: TierStyle = TierStyle {
    label: "⚡ FINAL MINUTES",
    color: "#00D9FF",
    glow: "rgba(0, 217, 255, 0.6)",
    animation: "neonPulse 1s ease-in-out infinite",
    cta: "TAP TO JOIN",
    urgency: "Only a few mins left!",
};

static GOING_LIVE_STYLE: TierStyle = TierStyle {
    label: "✨ GOING LIVE",
    color: "#39FF14",
    glow: "rgba(57, 255, 20, 0.6)",
    animation: "neonPulse 1.5s ease-in-out infinite",
    cta: "TAP TO JOIN",
    urgency: "Going live shortly",
};

static COMING_SOON_STYLE: TierStyle = TierStyle {
    label: "📅 COMING SOON",
    color: "#00D9FF",
    glow: "rgba(0, 217, 255, 0.4)",
    animation: "neonPulse 3s ease-in-out infinite",
    cta: "JOIN WAITLIST",
    urgency: "Starting shortly",
};

/// Tick-delivered view of one session's countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    /// Whole seconds until start; zero or negative once the room closes
    pub remaining_seconds: i64,

    /// Current urgency tier
    pub tier: Tier,

    /// Whether the join action is enabled
    pub join_enabled: bool,

    /// Approximate people-waiting count (engagement heuristic, not occupancy)
    pub waiting_count: u32,
}

/// Format a remaining-seconds value as MM:SS, clamped at zero
pub fn format_remaining(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}", s / 60, s % 60)
}
