use std::collections::HashMap;

use super::{
    directive::{SortDirective, split_contents},
    render::{SortableNode, TagKind},
};
use crate::error::{Result, SortableError};

/// Registry of tag names a template may use.
///
/// Hosts build one during startup and pass it to [`super::Template::parse`];
/// nothing is registered implicitly.
#[derive(Debug, Clone, Default)]
pub struct TagLibrary {
    tags: HashMap<String, TagKind>,
}

impl TagLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library with the four sortable tags under their standard names.
    pub fn sortable() -> Self {
        let mut library = Self::new();
        for kind in TagKind::ALL {
            library.register(kind.tag_name(), kind);
        }
        library
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        kind: TagKind,
    ) -> &mut Self {
        let name = name.into();
        tracing::debug!(tag = %name, ?kind, "registered sortable tag");
        self.tags.insert(name, kind);
        self
    }

    pub fn get(&self, name: &str) -> Option<TagKind> {
        self.tags.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Compiles a tag body such as `sortable_header name "Name"`.
    pub fn compile(&self, body: &str) -> Result<SortableNode> {
        let tokens = split_contents(body);
        let name = tokens.first().map(|t| t.text.clone()).unwrap_or_default();
        let kind = self
            .get(&name)
            .ok_or_else(|| SortableError::UnknownTag { name: name.clone() })?;
        let directive = SortDirective::from_tokens(tokens)?;
        Ok(SortableNode::new(kind, directive))
    }
}
