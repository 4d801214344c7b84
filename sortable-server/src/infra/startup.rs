use anyhow::Context;
use serde_json::json;
use sortable_config::Config;
use sortable_core::{TagLibrary, Template};
use std::sync::Arc;
use tracing::info;

use super::app_state::AppState;
use crate::handlers::people::sample_people;

const PEOPLE_TABLE: &str = include_str!("../templates/people_table.html");

/// Registers the sortable tags, compiles the page template and assembles
/// the state shared by all handlers.
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let library = TagLibrary::sortable();
    info!("registered sortable template tags");

    let table = Template::parse(PEOPLE_TABLE, &library)
        .context("failed to compile people table template")?;

    Ok(AppState {
        table: Arc::new(table),
        styles: Arc::new(config.styles.clone()),
        variables: Arc::new(json!({
            "labels": { "city": "Home town" },
        })),
        people: Arc::new(sample_people()),
    })
}
