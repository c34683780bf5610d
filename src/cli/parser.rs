use crate::core::import::ImportFormat;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rAttendLog
/// CLI application to record staff attendance actions with SQLite
#[derive(Parser)]
#[command(
    name = "rattendlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record staff check-ins/check-outs and rebuild work sessions from the action log",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that records an action.
#[derive(Args, Clone, Debug)]
pub struct PunchArgs {
    /// Staff identifier
    pub staff: String,

    /// Date of the action (YYYY-MM-DD), default today
    #[arg(long = "date")]
    pub date: Option<String>,

    /// Time of the action: HH:MM[:SS] or a full timestamp, default now
    #[arg(long = "at")]
    pub at: Option<String>,

    /// Device label (default from configuration)
    #[arg(long = "device")]
    pub device: Option<String>,

    /// Actor recorded as creator (default from configuration)
    #[arg(long = "by")]
    pub by: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a check-in
    Checkin(PunchArgs),

    /// Record a check-out
    Checkout(PunchArgs),

    /// Record check-out if a session is running, check-in otherwise
    Punch(PunchArgs),

    /// Show today's sessions and the worked-time clock for a staff member
    Status {
        staff: String,

        #[arg(long = "date", help = "Date to show (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(
            long = "watch",
            value_name = "SECONDS",
            help = "Refresh the clock once per second for the given number of seconds"
        )]
        watch: Option<u64>,
    },

    /// List worked time per day
    List {
        #[arg(long = "staff", help = "Only this staff member (default: everyone)")]
        staff: Option<String>,

        #[arg(
            long,
            short,
            help = "today | week | month | last7 | YYYY[-MM[-DD]] | <start>:<end>"
        )]
        period: Option<String>,

        #[arg(long = "sessions", help = "Show every session, not only daily totals")]
        sessions: bool,
    },

    /// Import action logs (getActionLogs JSON or CSV)
    Import {
        #[arg(value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Input format (default: from file extension)")]
        format: Option<ImportFormat>,
    },

    /// Export reconstructed sessions
    Export {
        staff: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            short,
            value_name = "PERIOD",
            help = "today | week | month | last7 | YYYY[-MM[-DD]] | <start>:<end> (default: month)"
        )]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
