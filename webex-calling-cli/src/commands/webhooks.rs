use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use futures::TryStreamExt;
use tracing::debug;
use webex_calling_client::types::{Webhook, WebhookStatus};
use webex_calling_client::WebexCallingApi;

use super::{or_dash, print_json, print_table, table};
use crate::cli::WebhookCommands;

pub async fn handle(api: &WebexCallingApi, cmd: WebhookCommands) -> Result<()> {
    match cmd {
        WebhookCommands::List { json } => list(api, json).await,
    }
}

async fn list(api: &WebexCallingApi, json: bool) -> Result<()> {
    let webhooks: Vec<Webhook> =
        api.webhooks.list(None, None).try_collect().await.context("Failed to list webhooks")?;
    debug!(count = webhooks.len(), "Fetched webhooks");

    if json {
        return print_json(&webhooks);
    }

    let mut table = table(&["Name", "Resource", "Event", "Target URL", "Status"]);
    for hook in &webhooks {
        let status = match &hook.status {
            Some(WebhookStatus::Active) => Cell::new("active").fg(Color::Green),
            Some(other) => Cell::new(other.as_str()).fg(Color::Red),
            None => Cell::new("-"),
        };
        table.add_row(vec![
            Cell::new(or_dash(hook.name.as_deref())),
            Cell::new(hook.resource.as_ref().map_or("-", |r| r.as_str())),
            Cell::new(hook.event.as_ref().map_or("-", |e| e.as_str())),
            Cell::new(or_dash(hook.target_url.as_deref())),
            status,
        ]);
    }
    print_table(&table, webhooks.len(), "webhooks");
    Ok(())
}
