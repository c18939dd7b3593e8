use crate::export::ExportFormat;
use crate::models::field::NoteField;
use crate::models::yes_no::YesNo;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fieldvisits
#[derive(Parser)]
#[command(
    name = "fieldvisits",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log field visits to retail store chains, filter them, check in, and exchange them as CSV",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second data set)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration in use
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new visit
    Add {
        #[arg(long, help = "Chain (required)")]
        chain: Option<String>,

        #[arg(long = "sub-chain", help = "Sub-chain / regional division")]
        sub_chain: Option<String>,

        #[arg(long = "venue", help = "Venue name (required)")]
        venue: Option<String>,

        #[arg(long = "city", help = "Venue city")]
        city: Option<String>,

        #[arg(long = "date", help = "Visit date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "status", help = "Status id (default: first configured status)")]
        status: Option<String>,

        #[arg(long = "member", help = "Team member id the visit is assigned to")]
        member: Option<String>,

        #[arg(
            long = "engagement",
            value_parser = clap::value_parser!(u8).range(1..=5),
            help = "Staff engagement 1-5 (default 3)"
        )]
        engagement: Option<u8>,

        #[arg(long = "problems", help = "Problems found")]
        problems: Option<String>,

        #[arg(long = "follow-up", help = "Follow-up notes")]
        follow_up: Option<String>,

        #[arg(long = "needs-follow-up", help = "Flag the visit as needing follow-up")]
        needs_follow_up: bool,

        #[arg(
            long = "set",
            value_name = "FIELD=VALUE",
            help = "Any other field, e.g. --set storeManager=Maria (repeatable)"
        )]
        set: Vec<String>,
    },

    /// Change fields of an existing visit
    Update {
        id: String,

        #[arg(
            long = "set",
            value_name = "FIELD=VALUE",
            required = true,
            help = "Field assignment (repeatable)"
        )]
        set: Vec<String>,
    },

    /// Change the status of a visit
    Status { id: String, status: String },

    /// Raise or lower staff engagement by one (stays within 1-5)
    Engage {
        id: String,

        #[arg(long, conflicts_with = "down", required_unless_present = "down")]
        up: bool,

        #[arg(long)]
        down: bool,
    },

    /// Mark a visit completed today
    Complete { id: String },

    /// Record a check-in, with coordinates when a position is available
    Checkin {
        id: String,

        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Append a (dictated) note to problems or followUp
    Note {
        id: String,

        #[arg(long, value_enum)]
        field: NoteField,

        text: String,
    },

    /// Delete a visit
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List visits, newest first
    List {
        #[arg(long, short = 'q', help = "Search venue, city, follow-up, problems, store manager")]
        q: Option<String>,

        #[arg(long)]
        member: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long = "follow-up", value_enum, ignore_case = true)]
        follow_up: Option<YesNo>,

        #[arg(long)]
        chain: Option<String>,

        #[arg(long, help = "From visit date (inclusive, YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "To visit date (inclusive, YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "scope-chain", help = "Restrict to a chain")]
        scope_chain: Option<String>,

        #[arg(
            long = "scope-sub-chain",
            help = "Restrict to a sub-chain of the scoped chain"
        )]
        scope_sub_chain: Option<String>,

        #[arg(long = "details", help = "Show problems, follow-up and check-ins")]
        details: bool,
    },

    /// List chains (configured first, then those found in visits)
    Chains,

    /// Export all visits
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: <csv_prefix>-<today>.<ext>)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import visits from CSV, replacing all stored visits
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Replace stored visits without asking")]
        yes: bool,
    },

    /// Show the team, or rename a member
    Team {
        #[arg(long, value_name = "ID", requires = "name")]
        rename: Option<String>,

        #[arg(long, requires = "rename")]
        name: Option<String>,
    },
}
