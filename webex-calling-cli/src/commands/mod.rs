//! Subcommand handlers. Each renders a table by default and JSON with `--json`.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

pub mod calls;
pub mod locations;
pub mod numbers;
pub mod people;
pub mod queues;
pub mod webhooks;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.to_vec());
    table
}

/// Print the table and a total line, or a notice when there is nothing to show.
pub(crate) fn print_table(table: &Table, count: usize, noun: &str) {
    if count == 0 {
        println!("{}", format!("No {noun} found.").as_str().yellow());
        return;
    }
    println!("{table}");
    println!("\n{count} {noun} total");
}

pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("HQ")), "HQ");
    }
}
