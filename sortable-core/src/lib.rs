//! Sortable column links for server-rendered HTML tables.
//!
//! The crate turns template directives such as
//! `{% sortable_header -score "Score" %}` into links that toggle the page's
//! `sort`/`dir` query parameters, plus the CSS classes that reflect the
//! current sort state:
//!
//! - [`tags`] parses directives, resolves their arguments and renders the
//!   four output variants (link, table header, bare URL, bare class).
//! - [`sorting`] holds the direction model, the configured styles and the
//!   link builder shared by every renderer.
//! - [`query`] models the incoming request path and its ordered,
//!   multi-valued query string.
//!
//! Nothing here sorts data; hosts read the same `sort`/`dir` parameters and
//! order their rows themselves.

pub mod error;
pub mod query;
pub mod sorting;
pub mod tags;

pub use error::{Result, SortableError};
pub use query::{QueryParams, RequestState};
pub use sorting::{
    DEFAULT_HEADER_CLASS, SortDirection, SortLink, SortState, SortStyles,
    build_link,
};
pub use tags::{
    RenderContext, ResolvableValue, SortDirective, SortableNode, TagKind,
    TagLibrary, Template, Variables,
};
