mod fares;
mod transactions;
mod users;

use crate::argparse::Commands;
use chrono::NaiveDate;
use ridedesk_filter::{applied_tags, parse_clock, FilterSchema, FilterValues};
use ridedesk_records::{matches_search, write_csv, TabularRecord};
use std::error::Error;

pub use fares::handle_fares_command;
pub use transactions::handle_transactions_command;
pub use users::handle_users_command;

pub fn handle_command(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Users(args) => handle_users_command(args),
        Commands::Transactions(args) => handle_transactions_command(args),
        Commands::Fares(args) => handle_fares_command(args),
    }
}

pub(crate) fn parse_day_arg(value: &str) -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}", value, e).into())
}

pub(crate) fn parse_clock_arg(value: &str) -> Result<u16, Box<dyn Error>> {
    parse_clock(value).ok_or_else(|| format!("Invalid time '{}'", value).into())
}

pub(crate) fn print_applied_filters(schema: &FilterSchema, values: &FilterValues) {
    let tags = applied_tags(schema, values);
    if tags.is_empty() {
        return;
    }
    println!("Active filters:");
    for tag in &tags {
        println!("  {}", tag.label);
    }
}

/// Apply the schema filters, then the optional free-text search
pub(crate) fn select_rows<'a, T>(
    schema: &FilterSchema,
    values: &FilterValues,
    records: &'a [T],
    search: Option<&str>,
) -> Vec<&'a T>
where
    T: ridedesk_filter::Filterable,
{
    let filtered = schema.apply(values, records);
    match search {
        Some(term) => filtered
            .into_iter()
            .filter(|record| matches_search(*record, term))
            .collect(),
        None => filtered,
    }
}

pub(crate) fn export_rows<T: TabularRecord>(
    rows: &[&T],
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(path)?;
    let written = write_csv(rows.iter().copied(), file)?;
    log::info!("Exported {} rows to {}", written, path);
    Ok(())
}
