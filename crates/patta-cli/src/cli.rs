//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use patta_domain::{ClaimField, ClaimStatus, ClaimType};

/// Patta CLI - Review forest-rights claims and get village recommendations.
#[derive(Debug, Parser)]
#[command(name = "patta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PATTA_CONFIG")]
    pub config: Option<String>,

    /// Claims snapshot file
    #[arg(long, global = true, env = "PATTA_CLAIMS")]
    pub claims: Option<String>,

    /// Village gazetteer file
    #[arg(long, global = true, env = "PATTA_VILLAGES")]
    pub villages: Option<String>,

    /// Log lifecycle and rule activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Take in extracted claim records
    Intake(IntakeArgs),

    /// Attach a geo-link result to an unlinked claim
    Attach(AttachArgs),

    /// List claims
    Claims(ClaimsArgs),

    /// List claims awaiting review, least certain first
    Queue,

    /// Review and save a claim that needs review
    Review(ReviewArgs),

    /// Edit one field of a claim
    Edit(EditArgs),

    /// Place a reviewed claim on the map
    Link(LinkArgs),

    /// Show claim counts per village
    Aggregate(AggregateArgs),

    /// Recommend actions for a village
    Recommend(RecommendArgs),

    /// Show the decision-support rule table
    Rules,

    /// List gazetteer villages
    Villages,
}

/// Arguments for the intake command.
#[derive(Debug, Parser)]
pub struct IntakeArgs {
    /// JSON file with one extraction record or an array of them
    #[arg(short = 'i', long)]
    pub file: Option<String>,

    /// Read extraction records from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the attach command.
#[derive(Debug, Parser)]
pub struct AttachArgs {
    /// Claim ID (or a unique prefix)
    pub id: String,

    /// Matched gazetteer village (omit when geo-linking found no match)
    #[arg(long)]
    pub village: Option<String>,

    /// Match confidence between 0.0 and 1.0
    #[arg(long)]
    pub confidence: f64,
}

/// Arguments for the claims command.
#[derive(Debug, Parser)]
pub struct ClaimsArgs {
    /// Filter by linked village
    #[arg(long)]
    pub village: Option<String>,

    /// Filter by status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// Filter by claim type
    #[arg(short = 't', long, value_enum)]
    pub claim_type: Option<ClaimTypeArg>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
pub struct ReviewArgs {
    /// Claim ID (or a unique prefix)
    pub id: String,

    /// Corrected claimant name
    #[arg(long)]
    pub claimant_name: Option<String>,

    /// Corrected village as written
    #[arg(long)]
    pub village: Option<String>,

    /// Corrected claim type
    #[arg(long, value_enum)]
    pub claim_type: Option<ClaimTypeArg>,

    /// Corrected area
    #[arg(long)]
    pub area: Option<String>,

    /// Corrected date
    #[arg(long)]
    pub date: Option<String>,

    /// Gazetteer village to link the claim to
    #[arg(short, long)]
    pub linked_village: Option<String>,
}

/// Arguments for the edit command.
#[derive(Debug, Parser)]
pub struct EditArgs {
    /// Claim ID (or a unique prefix)
    pub id: String,

    /// Field to edit
    #[arg(value_enum)]
    pub field: FieldArg,

    /// New value
    pub value: String,
}

/// Arguments for the link command.
#[derive(Debug, Parser)]
pub struct LinkArgs {
    /// Claim ID (or a unique prefix)
    pub id: String,
}

/// Arguments for the aggregate command.
#[derive(Debug, Parser)]
pub struct AggregateArgs {
    /// Village name (all linked villages when omitted)
    pub village: Option<String>,
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// Village name
    pub village: String,
}

/// Claim status argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    /// Geo-linking has not run
    Unlinked,
    /// Awaiting review
    NeedsReview,
    /// Shown on the map
    Linked,
    /// Reviewed, awaiting link
    Reviewed,
}

/// Claim type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ClaimTypeArg {
    /// Individual Forest Rights
    Ifr,
    /// Community Forest Rights
    Cfr,
    /// Community Resource rights
    Cr,
}

/// Editable field argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FieldArg {
    /// Claimant name
    ClaimantName,
    /// Village as written
    Village,
    /// Claim type
    ClaimType,
    /// Claimed area
    Area,
    /// Claim date
    Date,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<StatusArg> for ClaimStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Unlinked => ClaimStatus::Unlinked,
            StatusArg::NeedsReview => ClaimStatus::NeedsReview,
            StatusArg::Linked => ClaimStatus::Linked,
            StatusArg::Reviewed => ClaimStatus::Reviewed,
        }
    }
}

impl From<ClaimTypeArg> for ClaimType {
    fn from(claim_type: ClaimTypeArg) -> Self {
        match claim_type {
            ClaimTypeArg::Ifr => ClaimType::Ifr,
            ClaimTypeArg::Cfr => ClaimType::Cfr,
            ClaimTypeArg::Cr => ClaimType::Cr,
        }
    }
}

impl From<FieldArg> for ClaimField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::ClaimantName => ClaimField::ClaimantName,
            FieldArg::Village => ClaimField::Village,
            FieldArg::ClaimType => ClaimField::ClaimType,
            FieldArg::Area => ClaimField::Area,
            FieldArg::Date => ClaimField::Date,
        }
    }
}
