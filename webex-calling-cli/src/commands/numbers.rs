use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use futures::TryStreamExt;
use tracing::debug;
use webex_calling_client::api::NumberListParams;
use webex_calling_client::types::{NumberListItem, NumberOwner, NumberState};
use webex_calling_client::WebexCallingApi;

use super::{or_dash, print_json, print_table, table};
use crate::cli::NumberCommands;

pub async fn handle(api: &WebexCallingApi, cmd: NumberCommands) -> Result<()> {
    match cmd {
        NumberCommands::List { location_id, json } => list(api, location_id, json).await,
    }
}

async fn list(api: &WebexCallingApi, location_id: Option<String>, json: bool) -> Result<()> {
    let params = NumberListParams { location_id, ..Default::default() };
    let numbers: Vec<NumberListItem> =
        api.numbers.list(&params).try_collect().await.context("Failed to list numbers")?;
    debug!(count = numbers.len(), "Fetched phone numbers");

    if json {
        return print_json(&numbers);
    }

    let mut table = table(&["Number", "Extension", "Location", "Owner", "State"]);
    for number in &numbers {
        let location = number.location.as_ref().and_then(|l| l.name.as_deref());
        let owner = number.owner.as_ref().and_then(owner_name);
        table.add_row(vec![
            Cell::new(or_dash(number.phone_number.as_deref())),
            Cell::new(or_dash(number.extension.as_deref())),
            Cell::new(or_dash(location)),
            Cell::new(owner.as_deref().unwrap_or("-")),
            state_cell(number.state.as_ref()),
        ]);
    }
    print_table(&table, numbers.len(), "numbers");
    Ok(())
}

fn owner_name(owner: &NumberOwner) -> Option<String> {
    if let Some(name) = &owner.display_name {
        return Some(name.clone());
    }
    match (&owner.first_name, &owner.last_name) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        (Some(name), None) | (None, Some(name)) => Some(name.clone()),
        (None, None) => None,
    }
}

fn state_cell(state: Option<&NumberState>) -> Cell {
    match state {
        Some(NumberState::Active) => Cell::new("Active").fg(Color::Green),
        Some(NumberState::Inactive) => Cell::new("Inactive").fg(Color::Yellow),
        Some(other) => Cell::new(other.as_str()),
        None => Cell::new("-"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_name_prefers_display_name() {
        let owner = NumberOwner {
            display_name: Some("Front Desk".to_string()),
            first_name: Some("Ann".to_string()),
            ..Default::default()
        };
        assert_eq!(owner_name(&owner).as_deref(), Some("Front Desk"));

        let owner = NumberOwner {
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            ..Default::default()
        };
        assert_eq!(owner_name(&owner).as_deref(), Some("Ann Lee"));
        assert_eq!(owner_name(&NumberOwner::default()), None);
    }
}
