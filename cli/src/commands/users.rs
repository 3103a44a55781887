use super::{export_rows, parse_day_arg, print_applied_filters, select_rows};
use crate::argparse::UsersArgs;
use log::info;
use ridedesk_filter::{FilterValue, FilterValues};
use ridedesk_records::{users_page, Dataset, UserRecord};
use std::error::Error;
use tabular::{Row, Table};

pub fn handle_users_command(args: UsersArgs) -> Result<(), Box<dyn Error>> {
    let dataset: Dataset<UserRecord> = Dataset::new_from_file(&args.csv)?;
    info!("Loaded {} users from {}", dataset.len(), args.csv);

    let schema = users_page();
    let mut values = FilterValues::new();
    if let Some(name) = &args.name {
        values.set("full_name", FilterValue::Text(name.clone()));
    }
    for role in &args.role {
        values.add_selection("role", role.clone());
    }
    if let Some(status) = &args.status {
        values.add_selection("status", status.clone());
    }
    if let Some(city) = &args.city {
        values.set("city", FilterValue::Text(city.clone()));
    }
    if args.joined_from.is_some() || args.joined_to.is_some() {
        let from = args.joined_from.as_deref().map(parse_day_arg).transpose()?;
        let to = args.joined_to.as_deref().map(parse_day_arg).transpose()?;
        values.set("joined", FilterValue::Dates { from, to });
    }
    schema.validate(&values)?;

    print_applied_filters(&schema, &values);
    let rows = select_rows(&schema, &values, dataset.records(), args.search.as_deref());

    let mut table = Table::new("{:<}  {:<}  {:<}  {:<}  {:<}  {:<}");
    table.add_row(
        Row::new()
            .with_cell("ID")
            .with_cell("Name")
            .with_cell("Role")
            .with_cell("Status")
            .with_cell("City")
            .with_cell("Joined"),
    );
    for user in &rows {
        table.add_row(
            Row::new()
                .with_cell(&user.user_id)
                .with_cell(&user.full_name)
                .with_cell(user.role.to_string())
                .with_cell(user.status.to_string())
                .with_cell(&user.city)
                .with_cell(&user.joined),
        );
    }
    print!("{}", table);
    println!("{} of {} users", rows.len(), dataset.len());

    if let Some(path) = &args.export {
        export_rows(&rows, path)?;
    }

    Ok(())
}
