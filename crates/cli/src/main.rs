use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use triage_core::{
    caseload, compute_stats, constants::REWARD_UNIT_COUNT, extract_tags, progress, unit_growth,
    CaseDraft, InsightReport, KudosBoard, KudosSubmission, Sticker, TriageConfig, TriageQueue,
    UnitGrowth,
};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Veterinary triage dashboard CLI")]
struct Cli {
    /// Caseload YAML file replacing the built-in sample queue
    #[arg(long, global = true)]
    caseload: Option<PathBuf>,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the queue in priority order
    Queue,
    /// Show aggregate statistics for the queue
    Stats,
    /// Show the insight report for one case
    Insight {
        /// Case identifier as shown by `queue`
        case_id: u32,
    },
    /// Extract clinical keyword tags from free-text symptoms
    Tags {
        /// Free-text symptom description
        text: String,
    },
    /// Show gamification progress for a kudos counter value
    Progress {
        /// Current kudos counter
        count: u32,
    },
    /// Validate and submit a kudos note
    Kudos {
        /// Sender display name
        from: String,
        /// Recipient display name
        to: String,
        /// Message body
        message: String,
        /// Sticker symbol from the fixed palette
        #[arg(long, default_value = "❤️")]
        sticker: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = TriageConfig::default();
    let queue = TriageQueue::from_drafts(load_drafts(cli.caseload.as_deref())?);

    match cli.command {
        Commands::Queue => {
            let ordered = queue.in_priority_order();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ordered)?);
            } else if ordered.is_empty() {
                println!("Queue is empty.");
            } else {
                for case in &ordered {
                    println!(
                        "[{}] #{} {} ({}) - wait {} min - MGCS {} - confidence {}",
                        case.severity.label(),
                        case.id,
                        case.name,
                        case.animal_type,
                        case.wait_time_minutes,
                        case.mgcs,
                        case.ai_confidence,
                    );
                }
            }
        }
        Commands::Stats => {
            let stats = compute_stats(queue.cases())?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "Critical: {}, Urgent: {}, Stable: {}",
                    stats.count_by_severity.critical,
                    stats.count_by_severity.urgent,
                    stats.count_by_severity.stable,
                );
                println!("Average wait: {} min", stats.average_wait_minutes);
                println!("Average confidence: {}%", stats.average_confidence);
            }
        }
        Commands::Insight { case_id } => {
            let case = queue
                .get(case_id)
                .ok_or_else(|| format!("no case with id {case_id}"))?;
            let report = InsightReport::for_case(case, None)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} - {}", report.patient_name, report.severity.label());
                for line in report.lines {
                    println!("  {line}");
                }
                println!(
                    "  MGCS {} - confidence {}%",
                    report.mgcs, report.confidence_percent
                );
            }
        }
        Commands::Tags { text } => {
            let tags = extract_tags(&text, &BTreeSet::new(), config.vocabulary());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else if tags.is_empty() {
                println!("No clinical keywords found.");
            } else {
                println!("{}", tags.into_iter().collect::<Vec<_>>().join(", "));
            }
        }
        Commands::Progress { count } => {
            let count = count.min(config.max_kudos());
            let snapshot = progress(count, &config);
            let units: Vec<UnitGrowth> = (0..REWARD_UNIT_COUNT)
                .map(|unit_index| unit_growth(count, unit_index, &config))
                .collect();
            if cli.json {
                let payload = serde_json::json!({ "progress": snapshot, "units": units });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!(
                    "Level {} - {}% - {} kudos to next level",
                    snapshot.level, snapshot.progress_percent, snapshot.kudos_to_next_level
                );
                let grown = units.iter().filter(|u| u.is_fully_grown).count();
                println!("Reward units fully grown: {grown}/{REWARD_UNIT_COUNT}");
            }
        }
        Commands::Kudos {
            from,
            to,
            message,
            sticker,
        } => {
            let sticker = Sticker::from_symbol(&sticker)
                .ok_or_else(|| format!("unknown sticker symbol {sticker:?}"))?;
            let mut board = KudosBoard::new(config.max_kudos());
            let accepted = board
                .submit(
                    KudosSubmission {
                        from,
                        to,
                        message,
                        sticker,
                    },
                    chrono::Utc::now(),
                )?
                .clone();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&accepted)?);
            } else {
                println!(
                    "{} {} -> {}: {}",
                    accepted.sticker.symbol(),
                    accepted.from,
                    accepted.to,
                    accepted.message
                );
                println!("Kudos counter: {}", board.counter());
            }
        }
    }

    Ok(())
}

/// Resolves the caseload: an explicit file when given, the built-in sample
/// otherwise.
fn load_drafts(path: Option<&std::path::Path>) -> Result<Vec<CaseDraft>, triage_core::TriageError> {
    match path {
        Some(path) => caseload::load_file(path),
        None => Ok(caseload::sample()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_load_drafts_defaults_to_sample() {
        let drafts = load_drafts(None).expect("sample always loads");
        assert_eq!(drafts.len(), 3);
    }

    #[test]
    fn test_load_drafts_reads_caseload_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "cases:\n  - name: Coco\n    animal_type: rabbit\n    severity: stable\n    \
             heart_rate_bpm: 200\n    respiratory_rate: 40\n    temperature_c: 38.5\n    \
             mgcs: 18\n    ai_confidence: 82\n"
        )
        .expect("write temp file");

        let drafts = load_drafts(Some(file.path())).expect("valid caseload");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "Coco");
    }

    #[test]
    fn test_load_drafts_surfaces_missing_file() {
        let err = load_drafts(Some(std::path::Path::new("/nonexistent/caseload.yaml")))
            .expect_err("should fail for missing file");
        assert!(matches!(err, triage_core::TriageError::CaseloadRead(_)));
    }
}
