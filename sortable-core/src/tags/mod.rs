//! Template tags: `sortable_link`, `sortable_header`, `sortable_url` and
//! `sortable_class`.
//!
//! A [`TagLibrary`] maps tag names to a [`TagKind`]. Compiling an
//! invocation produces a [`SortableNode`], which is built once and then
//! rendered against a fresh [`RenderContext`] for every request.

pub mod context;
pub mod directive;
pub mod library;
pub mod render;
pub mod template;
pub mod value;

pub use context::{RenderContext, Variables};
pub use directive::{SortDirective, Token, split_contents};
pub use library::TagLibrary;
pub use render::{SortableNode, TagKind};
pub use template::{Template, TemplateNode};
pub use value::ResolvableValue;
