//! manas - telehealth portal demo driver
//!
//! Stands in for the rendering collaborator: drives the session registry,
//! lifecycle controller and countdown watcher from the terminal.

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use rand::Rng;
use tokio::sync::mpsc;

use manas::catalog;
use manas::config::Config;
use manas::countdown::{
    format_remaining, CountdownEvent, CountdownWatcher, RandomNudge, SystemClock, Tier,
};
use manas::lifecycle::{LifecycleController, LifecycleEvent, Role, User};
use manas::session::{Session, SessionDescriptor, SessionRegistry, SessionType};

#[derive(Parser)]
#[command(name = "manas")]
#[command(about = "A telehealth session scheduling and live-countdown tiering engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive a seeded session through the countdown tiers and lifecycle loop
    Simulate {
        /// Seconds until the simulated session starts
        #[arg(long, default_value_t = 8)]
        start_in: i64,
    },
    /// Print the yield projection for a seeded registry
    Earnings {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the static catalogs
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Simulate { start_in }) => simulate(&config, start_in).await,
        Some(Commands::Earnings { json }) => earnings(&config, json),
        Some(Commands::Catalog) => {
            print_catalog();
            Ok(())
        }
        None => simulate(&config, 8).await,
    }
}

/// Seed a registry the way the portal's first render does
fn seed_registry(config: &Config) -> Result<SessionRegistry> {
    let mut registry = SessionRegistry::new();
    let now = Utc::now();

    let descriptor =
        SessionDescriptor::new(SessionType::Individual, now + Duration::minutes(5), 45)
            .with_patient("Sarah Johnson")
            .with_notes("Follow up on anxiety exercises.");
    registry.create_session(descriptor, &config.general.default_therapist)?;

    if let Some(theme) = catalog::theme_by_slug("student-stress") {
        let participants = rand::thread_rng().gen_range(4..12);
        registry.insert(Session::drop_in(theme.clone(), participants, now));
    }
    if let Some(environment) = catalog::environment_by_id("therapy_forest") {
        registry.insert(Session::quick_vr(
            environment.clone(),
            &config.general.default_therapist,
            now,
        ));
    }

    Ok(registry)
}

async fn simulate(config: &Config, start_in: i64) -> Result<()> {
    let operator = User {
        id: "th-1".to_string(),
        name: config.general.default_therapist.clone(),
        role: Role::Therapist,
    };

    let mut registry = SessionRegistry::new();
    let descriptor = SessionDescriptor::new(
        SessionType::Individual,
        Utc::now() + Duration::seconds(start_in),
        config.general.default_duration_minutes,
    )
    .with_patient("Sarah Johnson")
    .with_notes("Follow up on anxiety exercises.");
    let session = registry.create_session(descriptor, &operator.name)?;

    let (countdown_tx, mut countdown_rx) = mpsc::channel(64);
    let mut watcher = CountdownWatcher::spawn(
        &session,
        &config.countdown,
        SystemClock,
        RandomNudge::new(config.countdown.waitlist_probability),
        countdown_tx,
    );

    let (lifecycle_tx, mut lifecycle_rx) = mpsc::channel(16);
    let mut controller = LifecycleController::new(operator.role, lifecycle_tx);

    let mut join_requested = false;
    while let Some(event) = countdown_rx.recv().await {
        match event {
            CountdownEvent::Snapshot { snapshot, .. } => {
                let style = snapshot.tier.style();
                tracing::info!(
                    "{} {} | {} waiting | {}",
                    format_remaining(snapshot.remaining_seconds),
                    style.label,
                    snapshot.waiting_count,
                    style.cta,
                );
                if snapshot.tier == Tier::LiveNow && !join_requested {
                    join_requested = true;
                    watcher.join().await;
                }
                if snapshot.tier == Tier::RoomClosed {
                    break;
                }
            }
            CountdownEvent::JoinPending { .. } => {
                tracing::info!("Join requested, confirming...");
            }
            CountdownEvent::Joined { .. } => {
                tracing::info!("Joined");
                controller.join_session(session.clone());
                controller.admit()?;
                controller.leave()?;
                controller.acknowledge_feedback()?;
            }
        }
    }
    watcher.shutdown();

    while let Ok(LifecycleEvent::ViewChanged { view, .. }) = lifecycle_rx.try_recv() {
        tracing::info!("View -> {:?}", view);
    }

    let report = registry.yield_report(&config.pricing);
    tracing::info!(
        "Projected payout ₹{} of ₹{} gross",
        report.therapist_payout,
        report.total_revenue
    );

    Ok(())
}

fn earnings(config: &Config, json: bool) -> Result<()> {
    let registry = seed_registry(config)?;
    let report = registry.yield_report(&config.pricing);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Sessions booked:  {}", registry.len());
        println!("Gross revenue:    ₹{}", report.total_revenue);
        println!("Therapist payout: ₹{}", report.therapist_payout);
        println!("Platform share:   ₹{}", report.platform_share);
    }

    Ok(())
}

fn print_catalog() {
    println!("Group themes:");
    for theme in catalog::GROUP_THEMES.iter() {
        println!("  {} {} ({})", theme.emoji, theme.name, theme.slug);
    }
    println!("\nVR environments:");
    for env in catalog::VR_ENVIRONMENTS.iter() {
        println!(
            "  {} {} - {} ({})",
            env.icon, env.name, env.therapy_type, env.id
        );
    }
    println!("\nCBT modules:");
    for module in catalog::VR_MODULES.iter() {
        println!("  {} {} - {}", module.icon, module.name, module.description);
    }
}
