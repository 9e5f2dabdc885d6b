use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_core::arrivals::ArrivalSimulator;
use triage_core::config::counter_from_env_value;
use triage_core::constants::{
    DEFAULT_ARRIVAL_CHANCE, DEFAULT_KUDOS_PER_LEVEL, DEFAULT_LIFE_SAVED_CHANCE, DEFAULT_MAX_KUDOS,
    DEFAULT_VOCABULARY,
};
use triage_core::{
    Case, KudosBoard, ProgressSnapshot, QueueStats, TriageConfig, TriageQueue, caseload,
    compute_stats, progress,
};

/// Final dashboard state emitted as JSON when the feed stops.
#[derive(Serialize)]
struct DashboardSnapshot {
    queue: Vec<Case>,
    stats: QueueStats,
    lives_saved: u64,
    kudos_counter: u32,
    progress: ProgressSnapshot,
}

/// Main entry point for the triage demo feed
///
/// Runs the arrival simulator over the built-in sample caseload for a fixed
/// number of ticks, logging admissions, saved lives, and queue statistics,
/// then prints a final dashboard snapshot as JSON.
///
/// # Environment Variables
/// - `TRIAGE_TICKS`: number of simulator ticks to run (default: 12)
/// - `TRIAGE_SEED`: seed for the random source; unset means entropy-seeded
/// - `TRIAGE_KUDOS_PER_LEVEL`: kudos per gamification level (default: 4)
/// - `TRIAGE_MAX_KUDOS`: kudos counter cap (default: 40)
///
/// # Returns
/// * `Ok(())` - If the feed runs to completion
/// * `Err(anyhow::Error)` - If configuration is invalid
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_core=info".parse()?)
                .add_directive("triage_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ticks = counter_from_env_value(std::env::var("TRIAGE_TICKS").ok(), 12)?;
    let kudos_per_level = counter_from_env_value(
        std::env::var("TRIAGE_KUDOS_PER_LEVEL").ok(),
        DEFAULT_KUDOS_PER_LEVEL,
    )?;
    let max_kudos =
        counter_from_env_value(std::env::var("TRIAGE_MAX_KUDOS").ok(), DEFAULT_MAX_KUDOS)?;

    let config = TriageConfig::new(
        kudos_per_level,
        max_kudos,
        DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
    )?;

    let rng = match std::env::var("TRIAGE_SEED") {
        Ok(raw) if !raw.trim().is_empty() => StdRng::seed_from_u64(raw.trim().parse()?),
        _ => StdRng::from_entropy(),
    };
    let mut simulator =
        ArrivalSimulator::new(rng, DEFAULT_ARRIVAL_CHANCE, DEFAULT_LIFE_SAVED_CHANCE)?;

    let pool = caseload::sample();
    let mut queue = TriageQueue::from_drafts(pool.clone());
    // The board opens mid-level, matching the dashboard's starting state.
    let board = KudosBoard::with_counter(2, config.max_kudos());
    let mut lives_saved: u64 = 247;

    tracing::info!("++ Starting triage feed for {} ticks", ticks);

    for tick in 1..=ticks {
        let outcome = simulator.tick(pool.len());

        if let Some(index) = outcome.admission {
            let mut draft = pool[index].clone();
            draft.wait_time_minutes = 0;
            let id = queue.admit(draft);
            tracing::info!(tick, id, "new case arrived");
        }

        if outcome.life_saved {
            lives_saved += 1;
            tracing::info!(tick, lives_saved, "life saved");
        }

        let stats = compute_stats(queue.cases())?;
        tracing::info!(
            tick,
            critical = stats.count_by_severity.critical,
            urgent = stats.count_by_severity.urgent,
            stable = stats.count_by_severity.stable,
            avg_wait_minutes = stats.average_wait_minutes,
            "queue status"
        );
    }

    let snapshot = DashboardSnapshot {
        stats: compute_stats(queue.cases())?,
        queue: queue.in_priority_order(),
        lives_saved,
        kudos_counter: board.counter(),
        progress: progress(board.counter(), &config),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
