use super::{export_rows, parse_clock_arg, parse_day_arg, print_applied_filters, select_rows};
use crate::argparse::TransactionsArgs;
use log::info;
use ridedesk_filter::{FilterValue, FilterValues};
use ridedesk_records::{transactions_page, Dataset, DriverTransaction};
use std::error::Error;
use tabular::{Row, Table};

pub fn handle_transactions_command(args: TransactionsArgs) -> Result<(), Box<dyn Error>> {
    let dataset: Dataset<DriverTransaction> = Dataset::new_from_file(&args.csv)?;
    info!("Loaded {} transactions from {}", dataset.len(), args.csv);

    let schema = transactions_page();
    let mut values = FilterValues::new();
    if let Some(driver) = &args.driver {
        values.set("driver_name", FilterValue::Text(driver.clone()));
    }
    for class in &args.vehicle_class {
        values.add_selection("vehicle_class", class.clone());
    }
    if let Some(tx_type) = &args.tx_type {
        values.add_selection("tx_type", tx_type.clone());
    }
    for method in &args.payment_method {
        values.add_selection("payment_method", method.clone());
    }
    if args.amount_min.is_some() || args.amount_max.is_some() {
        values.set(
            "amount",
            FilterValue::Numeric {
                min: args.amount_min,
                max: args.amount_max,
            },
        );
    }
    if args.date_from.is_some() || args.date_to.is_some() {
        let from = args.date_from.as_deref().map(parse_day_arg).transpose()?;
        let to = args.date_to.as_deref().map(parse_day_arg).transpose()?;
        values.set("date", FilterValue::Dates { from, to });
    }
    if args.time_from.is_some() || args.time_to.is_some() {
        let from = args.time_from.as_deref().map(parse_clock_arg).transpose()?;
        let to = args.time_to.as_deref().map(parse_clock_arg).transpose()?;
        values.set("time_slot", FilterValue::TimeWindow { from, to });
    }
    schema.validate(&values)?;

    print_applied_filters(&schema, &values);
    let rows = select_rows(&schema, &values, dataset.records(), args.search.as_deref());

    let mut table = Table::new("{:<}  {:<}  {:<}  {:<}  {:<}  {:>}  {:<}  {:<}  {:<}");
    table.add_row(
        Row::new()
            .with_cell("ID")
            .with_cell("Driver")
            .with_cell("Class")
            .with_cell("Type")
            .with_cell("Payment")
            .with_cell("Amount")
            .with_cell("Status")
            .with_cell("Date")
            .with_cell("Time slot"),
    );
    for tx in &rows {
        table.add_row(
            Row::new()
                .with_cell(&tx.tx_id)
                .with_cell(&tx.driver_name)
                .with_cell(tx.vehicle_class.to_string())
                .with_cell(tx.tx_type.to_string())
                .with_cell(tx.payment_method.to_string())
                .with_cell(&tx.amount)
                .with_cell(tx.status.to_string())
                .with_cell(&tx.date)
                .with_cell(&tx.time_slot),
        );
    }
    print!("{}", table);
    println!("{} of {} transactions", rows.len(), dataset.len());

    if let Some(path) = &args.export {
        export_rows(&rows, path)?;
    }

    Ok(())
}
