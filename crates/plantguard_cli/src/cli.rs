use clap::{Args, Parser, Subcommand};
use plantguard_core::{
    Effectiveness, RecordKind, RecordStatus, RemedyCategory, Severity, DEFAULT_RECENT_LIMIT,
};

/// PlantGuard plant-health report browser
#[derive(Debug, Parser)]
#[command(
    name = "plantguard",
    version,
    about = "Browse, relate and review plant disease, pest and remedy reports"
)]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "PLANTGUARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "PLANTGUARD_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List records of one kind, optionally filtered
    List(ListArgs),
    /// Show one record by id or name
    Show(TargetArgs),
    /// Show records related to one record
    Related(TargetArgs),
    /// Approve a record as the given user
    Approve(ReviewArgs),
    /// Reject a record as the given user
    Reject(ReviewArgs),
    /// Print dashboard counters and recent reports
    Summary {
        /// Number of recent reports to include
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        recent: usize,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// disease | pest | remedy
    pub kind: RecordKind,

    /// Case-insensitive text search
    #[arg(long)]
    pub text: Option<String>,

    /// Disease and pest severity
    #[arg(long)]
    pub severity: Option<Severity>,

    #[arg(long)]
    pub status: Option<RecordStatus>,

    /// Pest season, e.g. Summer
    #[arg(long)]
    pub season: Option<String>,

    /// Remedy category
    #[arg(long)]
    pub category: Option<RemedyCategory>,

    /// Remedy effectiveness
    #[arg(long)]
    pub effectiveness: Option<Effectiveness>,
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// disease | pest | remedy
    pub kind: RecordKind,

    /// Record id or exact name (case-insensitive)
    pub target: String,
}

#[derive(Debug, Args)]
pub struct ReviewArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Email of the acting user
    #[arg(long = "as", value_name = "EMAIL")]
    pub actor: String,
}
