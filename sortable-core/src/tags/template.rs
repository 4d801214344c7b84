use super::{context::RenderContext, library::TagLibrary, render::SortableNode};
use crate::error::{Result, SortableError};

const TAG_OPEN: &str = "{%";
const TAG_CLOSE: &str = "%}";

/// Piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    /// Source text copied to the output unchanged.
    Text(String),
    /// A `{% ... %}` tag compiled through the [`TagLibrary`].
    Tag(SortableNode),
}

/// Text with embedded sortable tags, compiled once and rendered per request.
///
/// Only `{% ... %}` blocks are interpreted; everything else is emitted
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<TemplateNode>,
}

impl Template {
    pub fn parse(source: &str, library: &TagLibrary) -> Result<Self> {
        let mut nodes = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(TAG_OPEN) {
            if start > 0 {
                nodes.push(TemplateNode::Text(rest[..start].to_string()));
            }
            let body_start = start + TAG_OPEN.len();
            let Some(len) = rest[body_start..].find(TAG_CLOSE) else {
                return Err(SortableError::UnclosedTag {
                    offset: offset + start,
                });
            };
            let body = rest[body_start..body_start + len].trim();
            nodes.push(TemplateNode::Tag(library.compile(body)?));

            let consumed = body_start + len + TAG_CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            nodes.push(TemplateNode::Text(rest.to_string()));
        }

        tracing::debug!(nodes = nodes.len(), "compiled sortable template");
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[TemplateNode] {
        &self.nodes
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                TemplateNode::Text(text) => out.push_str(text),
                TemplateNode::Tag(tag) => out.push_str(&tag.render(ctx)),
            }
        }
        out
    }
}
