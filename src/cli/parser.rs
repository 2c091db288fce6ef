use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rRecall
/// CLI application to schedule reviews of coding-practice problems with SQLite
#[derive(Parser)]
#[command(
    name = "rrecall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Spaced-repetition tracker for coding-practice problems, backed by SQLite",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Manage the database (schema, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Create or update the schema")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Track a new problem; its name is derived from the link
    Add {
        /// Problem link, e.g. https://leetcode.com/problems/two-sum/
        link: String,

        #[arg(
            long = "reps",
            short = 'r',
            help = "Successful reviews needed before the problem is retired (default from config: 3)"
        )]
        reps: Option<i32>,
    },

    /// List tracked problems, earliest due date first
    List {
        #[arg(long = "due", help = "Show only problems due for review")]
        due: bool,

        #[arg(long = "json", help = "Print the listing as JSON")]
        json: bool,
    },

    /// Show a single problem
    Show {
        id: i64,

        #[arg(long = "json", help = "Print the problem as JSON")]
        json: bool,
    },

    /// Record a review result: success or fail
    Review {
        id: i64,

        /// Review result: "success" or "fail"
        result: String,
    },

    /// Delete a problem by ID
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Export tracked problems
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
