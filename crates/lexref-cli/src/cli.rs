//! CLI argument definitions for the lexref browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lexref_data::Page;

#[derive(Parser)]
#[command(
    name = "lexref",
    version,
    about = "Legal reference browser - filterable, sortable, paginated tables",
    long_about = "Browse the penal code, case law, amendments and legal concepts\n\
                  as filterable, sortable, paginated tables.\n\n\
                  Table state (page, sort, filters) round-trips through a query\n\
                  string, so every view prints a link that reproduces it exactly."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a reference page as a table.
    Browse(BrowseArgs),

    /// List the available reference pages.
    Pages,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Page to browse.
    #[arg(value_enum, value_name = "PAGE")]
    pub page: PageArg,

    /// Seed state from a shareable query string, e.g. "page=2&sort=charge.desc&charge=theft".
    #[arg(long = "state", value_name = "QUERY")]
    pub state: Option<String>,

    /// Jump to a 1-based page number.
    #[arg(long = "page", value_name = "N")]
    pub page_number: Option<usize>,

    /// Rows per page.
    #[arg(long = "per-page", value_name = "N")]
    pub per_page: Option<usize>,

    /// Sort by "<column>.<asc|desc>", e.g. "fine.desc". An empty value clears the sort.
    #[arg(long = "sort", value_name = "COLUMN.DIR")]
    pub sort: Option<String>,

    /// Set a column filter as "<column>=<value>". Repeatable; an empty value
    /// clears that column's filter.
    #[arg(long = "filter", value_name = "COLUMN=VALUE")]
    pub filters: Vec<String>,

    /// Drop every active filter (before --filter arguments apply).
    #[arg(long = "clear-filters")]
    pub clear_filters: bool,

    /// Dataset directory (default: the repository's data/ directory,
    /// overridable with LEXREF_DATA_DIR).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// CLI page choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PageArg {
    PenalCode,
    CaseLaw,
    Amendments,
    LegalConcepts,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::PenalCode => Page::PenalCode,
            PageArg::CaseLaw => Page::CaseLaw,
            PageArg::Amendments => Page::Amendments,
            PageArg::LegalConcepts => Page::LegalConcepts,
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
