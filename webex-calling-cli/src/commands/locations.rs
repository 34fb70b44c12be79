use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::Cell;
use futures::TryStreamExt;
use tracing::{debug, info};
use webex_calling_client::api::LocationListParams;
use webex_calling_client::types::Location;
use webex_calling_client::WebexCallingApi;

use super::{or_dash, print_json, print_table, table};
use crate::cli::LocationCommands;

pub async fn handle(api: &WebexCallingApi, cmd: LocationCommands) -> Result<()> {
    match cmd {
        LocationCommands::List { name, json } => list(api, name, json).await,
        LocationCommands::Show { id } => show(api, &id).await,
        LocationCommands::Create { name, time_zone, announcement_language } => {
            create(api, &name, &time_zone, announcement_language.as_deref()).await
        },
    }
}

async fn list(api: &WebexCallingApi, name: Option<String>, json: bool) -> Result<()> {
    let params = LocationListParams { name, ..Default::default() };
    let locations: Vec<Location> =
        api.locations.list(&params).try_collect().await.context("Failed to list locations")?;
    debug!(count = locations.len(), "Fetched locations");

    if json {
        return print_json(&locations);
    }

    let mut table = table(&["ID", "Name", "Time zone", "City"]);
    for location in &locations {
        let city = location.address.as_ref().and_then(|a| a.city.as_deref());
        table.add_row(vec![
            Cell::new(or_dash(location.id.as_deref())),
            Cell::new(or_dash(location.name.as_deref())),
            Cell::new(or_dash(location.time_zone.as_deref())),
            Cell::new(or_dash(city)),
        ]);
    }
    print_table(&table, locations.len(), "locations");
    Ok(())
}

async fn show(api: &WebexCallingApi, id: &str) -> Result<()> {
    let location = api.locations.details(id, None).await.context("Failed to fetch location")?;
    print_json(&location)
}

async fn create(
    api: &WebexCallingApi,
    name: &str,
    time_zone: &str,
    announcement_language: Option<&str>,
) -> Result<()> {
    info!("Creating location {name} in {time_zone}");
    let id = api
        .locations
        .create(name, time_zone, None, announcement_language, None, None)
        .await
        .context("Failed to create location")?;
    println!("{} Location created: {}", "✓".green(), id.green());
    Ok(())
}
