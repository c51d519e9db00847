//! Channels command handler

use serde::Serialize;

use crate::domain::channel::{ChannelCatalog, ChannelDefinition};

use super::presenter::Presenter;

/// One catalog entry as printed by `channels --json`
#[derive(Debug, Serialize)]
struct ChannelRow {
    index: usize,
    identifier: &'static str,
    display_name: &'static str,
    importance: &'static str,
    platform_level: i32,
}

impl ChannelRow {
    fn new(index: usize, definition: &ChannelDefinition) -> Self {
        Self {
            index,
            identifier: definition.identifier(),
            display_name: definition.display_name(),
            importance: definition.importance().as_str(),
            platform_level: definition.importance().platform_level(),
        }
    }
}

fn rows() -> Vec<ChannelRow> {
    ChannelCatalog::all_definitions()
        .iter()
        .enumerate()
        .map(|(index, definition)| ChannelRow::new(index, definition))
        .collect()
}

/// Handle channels subcommand
pub fn handle_channels_command(json: bool, presenter: &Presenter) -> Result<(), serde_json::Error> {
    if json {
        presenter.output(&serde_json::to_string_pretty(&rows())?);
        return Ok(());
    }

    for row in rows() {
        presenter.output(&format!(
            "{} ({})",
            presenter.format_channel(row.index, row.identifier, row.display_name),
            row.importance
        ));
    }
    Ok(())
}
