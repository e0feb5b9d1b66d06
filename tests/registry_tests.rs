//! Integration tests for the session registry

use chrono::{DateTime, Duration, TimeZone, Utc};
use manas::catalog;
use manas::config::PricingConfig;
use manas::session::{
    Session, SessionDescriptor, SessionRegistry, SessionStatus, SessionType, ValidationError,
};
use proptest::prelude::*;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 18, 0, 0).unwrap()
}

fn individual_descriptor(start_offset_minutes: i64) -> SessionDescriptor {
    SessionDescriptor::new(
        SessionType::Individual,
        base_time() + Duration::minutes(start_offset_minutes),
        45,
    )
    .with_patient("Sarah Johnson")
}

#[test]
fn test_create_individual_session() -> anyhow::Result<()> {
    let mut registry = SessionRegistry::new();
    let descriptor = individual_descriptor(5).with_notes("Follow up on anxiety exercises.");

    let session = registry.create_session(descriptor, "Dr. Emily Chen")?;

    assert_eq!(session.status, SessionStatus::Scheduled);
    assert!(session.is_encrypted);
    assert_eq!(session.therapist_name, "Dr. Emily Chen");
    assert_eq!(session.patient_name(), Some("Sarah Johnson"));
    assert_eq!(registry.len(), 1);

    Ok(())
}

#[test]
fn test_group_without_theme_is_rejected() {
    let mut registry = SessionRegistry::new();
    let descriptor = SessionDescriptor::new(SessionType::Group, base_time(), 60);

    let result = registry.create_session(descriptor, "Dr. Emily Chen");

    assert!(matches!(result, Err(ValidationError::MissingTheme)));
    assert!(registry.is_empty());
}

#[test]
fn test_zero_duration_is_rejected() {
    let mut registry = SessionRegistry::new();
    let descriptor =
        SessionDescriptor::new(SessionType::Individual, base_time(), 0).with_patient("Sarah");

    let result = registry.create_session(descriptor, "Dr. Emily Chen");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("positive"));
    assert!(registry.is_empty());
}

#[test]
fn test_vr_without_patient_is_rejected() {
    let environment = catalog::environment_by_id("therapy_forest").unwrap().clone();
    let mut registry = SessionRegistry::new();
    let descriptor = SessionDescriptor::new(SessionType::Vr, base_time(), 45)
        .with_environment(environment)
        .with_modules(vec!["thought_record".to_string()]);

    let result = registry.create_session(descriptor, "Dr. Emily Chen");

    assert!(matches!(
        result,
        Err(ValidationError::MissingPatientName { .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_vr_without_environment_is_rejected() {
    let mut registry = SessionRegistry::new();
    let descriptor =
        SessionDescriptor::new(SessionType::Vr, base_time(), 45).with_patient("Sarah Johnson");

    let result = registry.create_session(descriptor, "Dr. Emily Chen");

    assert!(matches!(result, Err(ValidationError::MissingEnvironment)));
}

#[test]
fn test_every_construction_path_is_encrypted() -> anyhow::Result<()> {
    let theme = catalog::theme_by_slug("student-stress").unwrap().clone();
    let environment = catalog::environment_by_id("calm_beach").unwrap().clone();

    let mut registry = SessionRegistry::new();
    let scheduled = registry.create_session(individual_descriptor(10), "Dr. Emily Chen")?;
    let drop_in = Session::drop_in(theme, 5, base_time());
    let quick = Session::quick_vr(environment, "Dr. Emily Chen", base_time());

    assert!(scheduled.is_encrypted);
    assert!(drop_in.is_encrypted);
    assert!(quick.is_encrypted);
    assert_eq!(drop_in.status, SessionStatus::Live);
    assert_eq!(quick.status, SessionStatus::Live);

    Ok(())
}

#[test]
fn test_registry_sorted_after_out_of_order_creates() -> anyhow::Result<()> {
    let mut registry = SessionRegistry::new();
    registry.create_session(individual_descriptor(30), "Dr. Emily Chen")?;
    registry.create_session(individual_descriptor(10), "Dr. Emily Chen")?;
    registry.create_session(individual_descriptor(20), "Dr. Emily Chen")?;

    let times: Vec<_> = registry.sessions().iter().map(|s| s.start_time).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(times[0], base_time() + Duration::minutes(10));

    Ok(())
}

#[test]
fn test_group_and_consultation_split() -> anyhow::Result<()> {
    let theme = catalog::theme_by_slug("anxiety-circle").unwrap().clone();
    let environment = catalog::environment_by_id("therapy_forest").unwrap().clone();

    let mut registry = SessionRegistry::new();
    registry.create_session(individual_descriptor(5), "Dr. Emily Chen")?;
    registry.insert(Session::drop_in(theme, 6, base_time()));
    registry.insert(Session::quick_vr(environment, "Dr. Emily Chen", base_time()));

    assert_eq!(registry.group_sessions().len(), 1);
    assert_eq!(registry.consultations().len(), 2);

    Ok(())
}

#[test]
fn test_find_by_id() -> anyhow::Result<()> {
    let mut registry = SessionRegistry::new();
    let session = registry.create_session(individual_descriptor(5), "Dr. Emily Chen")?;

    assert_eq!(registry.find(session.id).map(|s| s.id), Some(session.id));
    assert!(registry.find(uuid::Uuid::new_v4()).is_none());

    Ok(())
}

#[test]
fn test_yield_projection() -> anyhow::Result<()> {
    let theme = catalog::theme_by_slug("student-stress").unwrap().clone();
    let environment = catalog::environment_by_id("therapy_forest").unwrap().clone();

    let mut registry = SessionRegistry::new();
    registry.create_session(individual_descriptor(5), "Dr. Emily Chen")?;
    registry.insert(Session::drop_in(theme, 3, base_time()));
    registry.insert(Session::quick_vr(environment, "Dr. Emily Chen", base_time()));

    let pricing = PricingConfig {
        payout_fraction: 0.5,
        ..PricingConfig::default()
    };
    let report = registry.yield_report(&pricing);

    // 1499 individual + 3 * 499 group + 2499 VR
    assert_eq!(report.total_revenue, 1499 + 1497 + 2499);
    assert_eq!(report.therapist_payout, 2747);
    assert_eq!(report.platform_share, 2748);
    assert_eq!(
        report.therapist_payout + report.platform_share,
        report.total_revenue
    );

    Ok(())
}

proptest! {
    #[test]
    fn registry_stays_sorted(offsets in prop::collection::vec(-10_000i64..10_000, 1..40)) {
        let mut registry = SessionRegistry::new();
        for (i, offset) in offsets.iter().enumerate() {
            let descriptor = SessionDescriptor::new(
                SessionType::Individual,
                base_time() + Duration::seconds(*offset),
                30,
            )
            .with_patient(format!("Patient {i}"));
            registry.create_session(descriptor, "Dr. Emily Chen").unwrap();
        }

        let times: Vec<_> = registry.sessions().iter().map(|s| s.start_time).collect();
        prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn payout_identity_holds(
        individuals in 0u32..12,
        vr_count in 0u32..12,
        group_sizes in prop::collection::vec(1u32..=15, 0..8),
        payout_fraction in 0.0f64..=1.0,
    ) {
        let theme = catalog::theme_by_slug("student-stress").unwrap().clone();
        let environment = catalog::environment_by_id("therapy_forest").unwrap().clone();

        let mut registry = SessionRegistry::new();
        for i in 0..individuals {
            let descriptor = individual_descriptor(i64::from(i));
            registry.create_session(descriptor, "Dr. Emily Chen").unwrap();
        }
        for _ in 0..vr_count {
            registry.insert(Session::quick_vr(environment.clone(), "Dr. Emily Chen", base_time()));
        }
        for size in &group_sizes {
            registry.insert(Session::drop_in(theme.clone(), *size, base_time()));
        }

        let pricing = PricingConfig { payout_fraction, ..PricingConfig::default() };
        let report = registry.yield_report(&pricing);

        prop_assert_eq!(
            report.therapist_payout + report.platform_share,
            report.total_revenue
        );
        prop_assert!(report.therapist_payout <= report.total_revenue);
    }
}
