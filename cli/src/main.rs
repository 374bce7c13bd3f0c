//! urna — administrative entry point for the vote ledger.

mod config;

use anyhow::Context;
use clap::Parser;
use config::CliConfig;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use urna_audit::{resolve_winner, AuditReport, ChainAuditor, TallyAnomaly, TallyOutcome};
use urna_ledger::VoteLedger;
use urna_notify::{ConfirmationDispatcher, TracingNotifier, VoteConfirmation};
use urna_store::MetaStore;
use urna_store_lmdb::LmdbVoteStore;

#[derive(Parser)]
#[command(name = "urna", about = "Tamper-evident hash-chained vote ledger")]
struct Cli {
    /// Directory holding the LMDB vote store.
    #[arg(long, env = "URNA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "URNA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as line-delimited JSON.
    #[arg(long, env = "URNA_JSON_LOGS")]
    json_logs: bool,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Open voting.
    Open,
    /// Close voting.
    Close,
    /// Cast one ballot.
    Cast {
        /// Unique voter identity.
        #[arg(long)]
        voter: String,
        /// Voter display name.
        #[arg(long)]
        name: String,
        /// Candidate identifier.
        #[arg(long)]
        candidate: String,
    },
    /// Verify chain integrity and print the verified tally.
    Audit {
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Resolve and print the winner from the verified tally.
    Result,
    /// Print raw (non-verified) voting statistics.
    Stats,
    /// Delete every vote record and close voting.
    Reset {
        /// Required; there is no undo.
        #[arg(long)]
        yes: bool,
    },
}

/// Everything `audit --json` emits.
#[derive(Serialize)]
struct FullAudit {
    #[serde(flatten)]
    report: AuditReport,
    anomalies: Vec<TallyAnomaly>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CliConfig::default(),
    };
    let data_dir = cli.data_dir.unwrap_or(file_config.data_dir);
    let log_level = cli.log_level.unwrap_or(file_config.log_level);
    let json_logs = cli.json_logs || file_config.log_format == "json";

    urna_utils::init_tracing_with(&log_level, json_logs);

    let store = LmdbVoteStore::open_with_map_size(&data_dir, file_config.map_size)
        .with_context(|| format!("opening vote store at {}", data_dir.display()))?;
    let ledger = VoteLedger::new(store.clone());
    // The process-wide switch mirrors the durable flag across invocations.
    ledger.set_voting_active(store.voting_active()?);

    match cli.command {
        Command::Open => {
            store.set_voting_active(true)?;
            ledger.set_voting_active(true);
            println!("voting is open");
        }
        Command::Close => {
            store.set_voting_active(false)?;
            ledger.set_voting_active(false);
            println!("voting is closed");
        }
        Command::Cast {
            voter,
            name,
            candidate,
        } => {
            let (dispatcher, worker) = ConfirmationDispatcher::spawn(Arc::new(TracingNotifier));
            let record = ledger.cast_vote(voter, name, candidate)?;
            dispatcher.dispatch(VoteConfirmation::from(&record));
            drop(dispatcher);
            worker.await?;
            println!("ballot committed; receipt: {}", record.current_hash);
        }
        Command::Audit { json } => {
            let report = ChainAuditor::verify_and_tally(ledger.store())?;
            let raw = ledger.statistics()?.votes_by_candidate;
            let anomalies = ChainAuditor::cross_check(&report, &raw);
            if json {
                let full = FullAudit { report, anomalies };
                println!("{}", serde_json::to_string_pretty(&full)?);
            } else {
                print_audit(&report, &anomalies);
            }
        }
        Command::Result => {
            let report = ChainAuditor::verify_and_tally(ledger.store())?;
            if !report.is_intact() {
                eprintln!(
                    "warning: chain diverges at index {}; only the verified prefix counts",
                    report.first_divergence.as_ref().map(|d| d.index).unwrap_or(0)
                );
            }
            match resolve_winner(&report.counts) {
                TallyOutcome::Winner { candidate, votes } => {
                    println!("winner: {candidate} with {votes} verified vote(s)");
                }
                TallyOutcome::NoVotesYet => println!("no verified votes yet"),
            }
        }
        Command::Stats => {
            let stats = ledger.statistics()?;
            println!(
                "voting {}; {} vote(s) recorded (raw, not chain-verified)",
                if stats.voting_active { "open" } else { "closed" },
                stats.total_votes
            );
            for (candidate, count) in &stats.votes_by_candidate {
                println!("  {candidate}: {count}");
            }
        }
        Command::Reset { yes } => {
            anyhow::ensure!(yes, "refusing to reset without --yes");
            ledger.reset()?;
            store.set_voting_active(false)?;
            println!("ledger reset; voting is closed");
        }
    }

    Ok(())
}

fn print_audit(report: &AuditReport, anomalies: &[TallyAnomaly]) {
    match &report.first_divergence {
        None => println!(
            "chain intact: {} verified vote(s)",
            report.total_verified
        ),
        Some(divergence) => println!(
            "chain DIVERGES at index {} ({:?}); {} verified vote(s) before the break",
            divergence.index, divergence.reason, report.total_verified
        ),
    }
    for (candidate, count) in &report.counts {
        println!("  {candidate}: {count}");
    }
    for anomaly in anomalies {
        println!(
            "  anomaly: {} raw count {} disagrees with verified count {}",
            anomaly.candidate, anomaly.raw, anomaly.verified
        );
    }
}
