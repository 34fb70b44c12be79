use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::Cell;
use tracing::info;
use webex_calling_client::WebexCallingApi;

use super::{or_dash, print_json, print_table, table};
use crate::cli::CallCommands;

pub async fn handle(api: &WebexCallingApi, cmd: CallCommands) -> Result<()> {
    match cmd {
        CallCommands::List { json } => list(api, json).await,
        CallCommands::Dial { destination } => dial(api, &destination).await,
        CallCommands::Hangup { call_id } => hangup(api, &call_id).await,
    }
}

async fn list(api: &WebexCallingApi, json: bool) -> Result<()> {
    let calls = api.call_controls.list_calls().await.context("Failed to list calls")?;

    if json {
        return print_json(&calls);
    }

    let mut table = table(&["Call ID", "State", "Remote party", "Number"]);
    for call in &calls {
        let remote = call.remote_party.as_ref();
        table.add_row(vec![
            Cell::new(or_dash(call.id.as_deref())),
            Cell::new(call.state.as_ref().map_or("-", |s| s.as_str())),
            Cell::new(or_dash(remote.and_then(|r| r.name.as_deref()))),
            Cell::new(or_dash(remote.and_then(|r| r.number.as_deref()))),
        ]);
    }
    print_table(&table, calls.len(), "active calls");
    Ok(())
}

async fn dial(api: &WebexCallingApi, destination: &str) -> Result<()> {
    info!("Dialing {destination}");
    let resp = api.call_controls.dial(destination, None).await.context("Failed to dial")?;
    println!(
        "{} Dialing {}: call {}",
        "✓".green(),
        destination.green(),
        or_dash(resp.call_id.as_deref())
    );
    Ok(())
}

async fn hangup(api: &WebexCallingApi, call_id: &str) -> Result<()> {
    info!("Hanging up call {call_id}");
    api.call_controls.hangup(call_id).await.context("Failed to hang up")?;
    println!("{} Call ended: {}", "✓".green(), call_id);
    Ok(())
}
