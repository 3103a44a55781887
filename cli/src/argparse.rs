use clap::{Args, Parser, Subcommand};

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[derive(Parser)]
#[command(
    name = "rd",
    about = "RideDesk fleet console",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and filter platform users
    Users(UsersArgs),
    /// List and filter driver transactions
    Transactions(TransactionsArgs),
    /// List and filter fare rules
    Fares(FaresArgs),
}

#[derive(Args)]
pub struct UsersArgs {
    /// CSV file with user records
    #[arg(long)]
    pub csv: String,

    /// Substring match on the user name
    #[arg(long)]
    pub name: Option<String>,

    /// Role selection, repeatable
    #[arg(long)]
    pub role: Vec<String>,

    /// Account status
    #[arg(long)]
    pub status: Option<String>,

    /// Substring match on the city
    #[arg(long)]
    pub city: Option<String>,

    /// Joined on or after this day, YYYY-MM-DD
    #[arg(long)]
    pub joined_from: Option<String>,

    /// Joined on or before this day, YYYY-MM-DD
    #[arg(long)]
    pub joined_to: Option<String>,

    /// Free-text search across every field
    #[arg(long)]
    pub search: Option<String>,

    /// Write the filtered rows to this CSV file
    #[arg(long)]
    pub export: Option<String>,
}

#[derive(Args)]
pub struct TransactionsArgs {
    /// CSV file with driver transactions
    #[arg(long)]
    pub csv: String,

    /// Substring match on the driver name
    #[arg(long)]
    pub driver: Option<String>,

    /// Vehicle class selection, repeatable
    #[arg(long)]
    pub vehicle_class: Vec<String>,

    /// Transaction type (Credit or Debit)
    #[arg(long)]
    pub tx_type: Option<String>,

    /// Payment method selection, repeatable
    #[arg(long)]
    pub payment_method: Vec<String>,

    /// Minimum amount
    #[arg(long)]
    pub amount_min: Option<f64>,

    /// Maximum amount
    #[arg(long)]
    pub amount_max: Option<f64>,

    /// On or after this day, YYYY-MM-DD
    #[arg(long)]
    pub date_from: Option<String>,

    /// On or before this day, YYYY-MM-DD
    #[arg(long)]
    pub date_to: Option<String>,

    /// Time-of-day window start, e.g. "06:00 AM"
    #[arg(long)]
    pub time_from: Option<String>,

    /// Time-of-day window end, e.g. "09:00 AM"
    #[arg(long)]
    pub time_to: Option<String>,

    /// Free-text search across every field
    #[arg(long)]
    pub search: Option<String>,

    /// Write the filtered rows to this CSV file
    #[arg(long)]
    pub export: Option<String>,
}

#[derive(Args)]
pub struct FaresArgs {
    /// CSV file with fare rules
    #[arg(long)]
    pub csv: String,

    /// Substring match on the rule label
    #[arg(long)]
    pub label: Option<String>,

    /// Vehicle class selection, repeatable
    #[arg(long)]
    pub vehicle_class: Vec<String>,

    /// Day of week, e.g. Monday
    #[arg(long)]
    pub day: Option<String>,

    /// Time-of-day window start, e.g. "10:00 PM"
    #[arg(long)]
    pub time_from: Option<String>,

    /// Time-of-day window end, e.g. "06:00 AM"
    #[arg(long)]
    pub time_to: Option<String>,

    /// Minimum base fare
    #[arg(long)]
    pub fare_min: Option<f64>,

    /// Maximum base fare
    #[arg(long)]
    pub fare_max: Option<f64>,

    /// Only active (true) or inactive (false) rules
    #[arg(long)]
    pub active: Option<String>,

    /// Free-text search across every field
    #[arg(long)]
    pub search: Option<String>,

    /// Write the filtered rows to this CSV file
    #[arg(long)]
    pub export: Option<String>,
}
