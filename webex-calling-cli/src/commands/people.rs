use anyhow::{Context, Result};
use comfy_table::Cell;
use futures::TryStreamExt;
use tracing::debug;
use webex_calling_client::api::PeopleListParams;
use webex_calling_client::types::Person;
use webex_calling_client::WebexCallingApi;

use super::{or_dash, print_json, print_table, table};
use crate::cli::PeopleCommands;

pub async fn handle(api: &WebexCallingApi, cmd: PeopleCommands) -> Result<()> {
    match cmd {
        PeopleCommands::List { email, location_id, json } => list(api, email, location_id, json).await,
    }
}

async fn list(
    api: &WebexCallingApi,
    email: Option<String>,
    location_id: Option<String>,
    json: bool,
) -> Result<()> {
    let params = PeopleListParams {
        email,
        location_id,
        calling_data: Some(true),
        ..Default::default()
    };
    let people: Vec<Person> =
        api.people.list(&params).try_collect().await.context("Failed to list people")?;
    debug!(count = people.len(), "Fetched people");

    if json {
        return print_json(&people);
    }

    let mut table = table(&["Name", "Email", "Extension", "Location"]);
    for person in &people {
        let email = person.emails.as_ref().and_then(|e| e.first()).map(String::as_str);
        table.add_row(vec![
            Cell::new(or_dash(person.display_name.as_deref())),
            Cell::new(or_dash(email)),
            Cell::new(or_dash(person.extension.as_deref())),
            Cell::new(or_dash(person.location_id.as_deref())),
        ]);
    }
    print_table(&table, people.len(), "people");
    Ok(())
}
