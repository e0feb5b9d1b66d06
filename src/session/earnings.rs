//! Yield projection - bookable revenue attribution over the registry

use super::{Session, SessionKind};
use crate::config::PricingConfig;
use serde::{Deserialize, Serialize};

/// Projected revenue split for the current registry
///
/// A bookable-revenue projection, not realized revenue: scheduled sessions
/// count. `total_revenue == therapist_payout + platform_share` always holds
/// exactly; the platform share is computed as the remainder, never rounded
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldReport {
    /// Gross bookable revenue across all sessions
    pub total_revenue: u64,

    /// Operator share, floored toward zero
    pub therapist_payout: u64,

    /// Platform remainder
    pub platform_share: u64,
}

pub(super) fn project(sessions: &[Session], pricing: &PricingConfig) -> YieldReport {
    let total_revenue: u64 = sessions.iter().map(|s| revenue_for(s, pricing)).sum();
    let fraction = pricing.payout_fraction.clamp(0.0, 1.0);
    let therapist_payout = ((total_revenue as f64 * fraction).floor() as u64).min(total_revenue);

    YieldReport {
        total_revenue,
        therapist_payout,
        platform_share: total_revenue - therapist_payout,
    }
}

fn revenue_for(session: &Session, pricing: &PricingConfig) -> u64 {
    match &session.kind {
        SessionKind::Group {
            current_participants,
            ..
        } => u64::from(*current_participants) * pricing.group_rate,
        SessionKind::Vr { .. } => pricing.vr_rate,
        SessionKind::Individual { .. } => pricing.individual_rate,
    }
}
