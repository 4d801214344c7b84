use serde_json::Value;
use sortable_core::{SortStyles, Template};
use std::sync::Arc;

use crate::handlers::people::Person;

/// Shared, read-only state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Table markup with sortable tags, compiled once at startup.
    pub table: Arc<Template>,
    pub styles: Arc<SortStyles>,
    /// Variables the tag arguments may refer to.
    pub variables: Arc<Value>,
    pub people: Arc<Vec<Person>>,
}
