use clap::{Parser, Subcommand, ValueEnum};
use rollcall::model::{SortField, SortOrder};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    bin_name = "rollcall",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Take attendance from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (default: $ROLLCALL_DATA, ./.rollcall, or the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Term, help_heading = "Options")]
    pub output: OutputMode,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Term,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the roster
    #[command(alias = "ls")]
    List {
        /// Sort by name
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Sort order (needs --sort)
        #[arg(long, value_enum, requires = "sort")]
        order: Option<OrderArg>,

        /// Only people whose first or last name contains TEXT
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },

    /// Take a roll interactively, one command per line on stdin
    Roll {
        /// Name for the roll when it is saved
        #[arg(long)]
        name: Option<String>,
    },

    /// Replay saved rolls
    #[command(alias = "log")]
    Activity {
        /// Show only this roll
        id: Option<u64>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print a commented rollcall.toml template
    Gen,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    First,
    Last,
    None,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::First => SortField::FirstName,
            SortArg::Last => SortField::LastName,
            SortArg::None => SortField::None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}
