use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nannymiles::TripType;

/// nannymiles - track nanny mileage, expenses and weekly reimbursement
#[derive(Parser, Debug)]
#[command(name = "nannymiles")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'nannymiles' without arguments for the interactive menu.")]
pub struct Cli {
    /// Data file (default: ~/.nannymiles/data.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Reimbursement rate in dollars per mile (default: 0.70)
    #[arg(long, global = true, value_name = "DOLLARS")]
    pub rate: Option<f64>,

    /// Config file (default: ~/.config/nannymiles/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log, change or list trips
    Trip {
        #[command(subcommand)]
        action: TripCommand,
    },

    /// Log, change or list reimbursable expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseCommand,
    },

    /// Manage reusable trip templates
    Template {
        #[command(subcommand)]
        action: TemplateCommand,
    },

    /// Show weekly summaries (Sunday to Saturday)
    Summary {
        /// Only the week containing this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        week: Option<String>,
    },

    /// Show overall miles, reimbursement and expenses
    Totals,

    /// Rebuild the stored weekly summaries at the current rate
    Recalculate,

    /// Serve the REST API
    Serve {
        /// Address to bind (default: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default: 8080)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Menu-driven mode
    Interactive,
}

#[derive(Subcommand, Debug)]
pub enum TripCommand {
    /// Log a trip
    Add(TripAddArgs),
    /// Change a trip; omitted fields keep their value
    Edit(TripEditArgs),
    /// Remove a trip
    Delete(RecordArg),
    /// List trips with their positions and ids
    List,
}

#[derive(Args, Debug)]
pub struct TripAddArgs {
    /// Trip date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Starting point
    #[arg(long, conflicts_with = "template")]
    pub origin: Option<String>,

    /// End point
    #[arg(long, conflicts_with = "template")]
    pub destination: Option<String>,

    /// Distance of one leg in miles
    #[arg(long)]
    pub miles: f64,

    /// single or round (round trips count the distance twice)
    #[arg(long = "type", value_name = "TYPE", conflicts_with = "template")]
    pub trip_type: Option<TripType>,

    /// Take origin, destination and type from a template (name, index or id)
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<String>,
}

#[derive(Args, Debug)]
pub struct TripEditArgs {
    /// Position (from `trip list`) or id
    pub reference: String,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub origin: Option<String>,

    #[arg(long)]
    pub destination: Option<String>,

    #[arg(long)]
    pub miles: Option<f64>,

    #[arg(long = "type", value_name = "TYPE")]
    pub trip_type: Option<TripType>,
}

#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    /// Record an expense
    Add(ExpenseAddArgs),
    /// Change an expense; omitted fields keep their value
    Edit(ExpenseEditArgs),
    /// Remove an expense
    Delete(RecordArg),
    /// List expenses with their positions and ids
    List,
}

#[derive(Args, Debug)]
pub struct ExpenseAddArgs {
    /// Expense date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Amount in dollars
    #[arg(long)]
    pub amount: f64,

    /// What it was for
    #[arg(long, short = 'd')]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct ExpenseEditArgs {
    /// Position (from `expense list`) or id
    pub reference: String,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub amount: Option<f64>,

    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// Save a reusable route
    Add(TemplateAddArgs),
    /// Change a template; omitted fields keep their value
    Edit(TemplateEditArgs),
    /// Remove a template
    Delete(RecordArg),
    /// List templates with their positions and ids
    List,
}

#[derive(Args, Debug)]
pub struct TemplateAddArgs {
    /// Template name, e.g. "School run"
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub origin: String,

    #[arg(long)]
    pub destination: String,

    /// single or round
    #[arg(long = "type", value_name = "TYPE", default_value = "single")]
    pub trip_type: TripType,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct TemplateEditArgs {
    /// Position (from `template list`) or id
    pub reference: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub origin: Option<String>,

    #[arg(long)]
    pub destination: Option<String>,

    #[arg(long = "type", value_name = "TYPE")]
    pub trip_type: Option<TripType>,

    /// New notes; pass an empty string to clear them
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct RecordArg {
    /// Position (from `list`) or id
    pub reference: String,
}
