use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use futures::TryStreamExt;
use tracing::debug;
use webex_calling_client::api::FeatureListParams;
use webex_calling_client::types::CallQueue;
use webex_calling_client::WebexCallingApi;

use super::{or_dash, print_json, print_table, table};
use crate::cli::QueueCommands;

pub async fn handle(api: &WebexCallingApi, cmd: QueueCommands) -> Result<()> {
    match cmd {
        QueueCommands::List { location_id, json } => list(api, location_id, json).await,
    }
}

async fn list(api: &WebexCallingApi, location_id: Option<String>, json: bool) -> Result<()> {
    let params = FeatureListParams { location_id, ..Default::default() };
    let queues: Vec<CallQueue> =
        api.call_queue.list(&params).try_collect().await.context("Failed to list call queues")?;
    debug!(count = queues.len(), "Fetched call queues");

    if json {
        return print_json(&queues);
    }

    let mut table = table(&["Name", "Location", "Phone number", "Extension", "Status"]);
    for queue in &queues {
        let status = match queue.enabled {
            Some(false) => Cell::new("Disabled").fg(Color::Red),
            _ => Cell::new("Enabled").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(or_dash(queue.name.as_deref())),
            Cell::new(or_dash(queue.location_name.as_deref())),
            Cell::new(or_dash(queue.phone_number.as_deref())),
            Cell::new(or_dash(queue.extension.as_deref())),
            status,
        ]);
    }
    print_table(&table, queues.len(), "call queues");
    Ok(())
}
