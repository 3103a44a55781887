use super::{export_rows, parse_clock_arg, print_applied_filters, select_rows};
use crate::argparse::FaresArgs;
use log::info;
use ridedesk_filter::{FilterValue, FilterValues};
use ridedesk_records::{fare_rules_page, Dataset, FareRule};
use std::error::Error;
use tabular::{Row, Table};

pub fn handle_fares_command(args: FaresArgs) -> Result<(), Box<dyn Error>> {
    let dataset: Dataset<FareRule> = Dataset::new_from_file(&args.csv)?;
    info!("Loaded {} fare rules from {}", dataset.len(), args.csv);

    let schema = fare_rules_page();
    let mut values = FilterValues::new();
    if let Some(label) = &args.label {
        values.set("label", FilterValue::Text(label.clone()));
    }
    for class in &args.vehicle_class {
        values.add_selection("vehicle_class", class.clone());
    }
    if let Some(day) = &args.day {
        values.add_selection("day", day.clone());
    }
    if args.time_from.is_some() || args.time_to.is_some() {
        let from = args.time_from.as_deref().map(parse_clock_arg).transpose()?;
        let to = args.time_to.as_deref().map(parse_clock_arg).transpose()?;
        values.set("time_slot", FilterValue::TimeWindow { from, to });
    }
    if args.fare_min.is_some() || args.fare_max.is_some() {
        values.set(
            "base_fare",
            FilterValue::Numeric {
                min: args.fare_min,
                max: args.fare_max,
            },
        );
    }
    if let Some(active) = &args.active {
        values.add_selection("active", active.to_lowercase());
    }
    schema.validate(&values)?;

    print_applied_filters(&schema, &values);
    let rows = select_rows(&schema, &values, dataset.records(), args.search.as_deref());

    let mut table = Table::new("{:<}  {:<}  {:<}  {:<}  {:<}  {:>}  {:>}  {:>}  {:>}  {:<}");
    table.add_row(
        Row::new()
            .with_cell("ID")
            .with_cell("Label")
            .with_cell("Class")
            .with_cell("Day")
            .with_cell("Time slot")
            .with_cell("Base")
            .with_cell("Per km")
            .with_cell("Per min")
            .with_cell("Surge")
            .with_cell("Active"),
    );
    for rule in &rows {
        table.add_row(
            Row::new()
                .with_cell(&rule.rule_id)
                .with_cell(&rule.label)
                .with_cell(rule.vehicle_class.to_string())
                .with_cell(&rule.day)
                .with_cell(&rule.time_slot)
                .with_cell(rule.base_fare)
                .with_cell(rule.per_km)
                .with_cell(rule.per_minute)
                .with_cell(rule.surge_multiplier)
                .with_cell(rule.active),
        );
    }
    print!("{}", table);
    println!("{} of {} fare rules", rows.len(), dataset.len());

    if let Some(path) = &args.export {
        export_rows(&rows, path)?;
    }

    Ok(())
}
