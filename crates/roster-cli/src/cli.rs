//! CLI argument definitions for the roster lookup tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_model::{Language, VoterStatus};
use roster_query::{GenderFilter, SortKey, SortOrder};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Voter roster lookup - search, filter and browse a bilingual voter list",
    long_about = "Search, filter, sort and page through a voter roster document.\n\n\
                  The roster is loaded once from a JSON file with male and female\n\
                  partitions. Names and addresses are shown in English or Bangla."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include voter names, ids and search text in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (TOML). Defaults are used when absent.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one page of voters matching the given filters.
    List(ListArgs),

    /// Show every field of one voter.
    Show(ShowArgs),

    /// List the distinct professions in the roster.
    Professions(SourceArgs),

    /// Interactive browser reading one command per line from stdin.
    Browse(SourceArgs),
}

/// Roster file and load options shared by every command.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the roster JSON document.
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Skip invalid records instead of aborting the load.
    #[arg(long = "lenient")]
    pub lenient: bool,

    /// Display language (overrides the settings file).
    #[arg(long = "lang", value_enum)]
    pub lang: Option<LanguageArg>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Case-insensitive substring search over names, voter number and address.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    #[arg(long = "gender", value_enum, default_value = "all")]
    pub gender: GenderArg,

    /// Status filter; repeat or comma-separate for several.
    #[arg(long = "status", value_enum, value_delimiter = ',')]
    pub status: Vec<StatusArg>,

    /// Exact English profession label (see the `professions` command).
    #[arg(long = "profession", value_name = "LABEL")]
    pub profession: Option<String>,

    #[arg(long = "sort", value_enum, default_value = "serial")]
    pub sort: SortKeyArg,

    #[arg(long = "order", value_enum, default_value = "asc")]
    pub order: SortOrderArg,

    /// Page to show; out-of-range values are clamped.
    #[arg(long = "page", short = 'p', default_value_t = 1)]
    pub page: usize,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Voter number to look up.
    #[arg(value_name = "VOTER_NO")]
    pub voter_id: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    En,
    Bn,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::English,
            LanguageArg::Bn => Language::Bangla,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    All,
    Male,
    Female,
}

impl From<GenderArg> for GenderFilter {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::All => GenderFilter::All,
            GenderArg::Male => GenderFilter::Male,
            GenderArg::Female => GenderFilter::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Cut,
    Migrated,
    Duplicate,
}

impl From<StatusArg> for VoterStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => VoterStatus::Active,
            StatusArg::Cut => VoterStatus::Cut,
            StatusArg::Migrated => VoterStatus::Migrated,
            StatusArg::Duplicate => VoterStatus::Duplicate,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    Serial,
    Name,
    #[value(name = "birth-date", alias = "dob")]
    BirthDate,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Serial => SortKey::Serial,
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::BirthDate => SortKey::BirthDate,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Asc => SortOrder::Ascending,
            SortOrderArg::Desc => SortOrder::Descending,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
