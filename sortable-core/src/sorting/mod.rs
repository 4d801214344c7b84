//! Sort state and link computation shared by every sortable renderer.
//!
//! This module provides:
//! - [`SortDirection`], the two-value direction model used in query strings
//! - [`SortStyles`], the configured CSS classes for each sort state
//! - [`SortState`], the `sort`/`dir` pair extracted from a request
//! - [`build_link`], the pure function computing the next URL and class

pub mod direction;
pub mod link;
pub mod styles;

pub use direction::SortDirection;
pub use link::{DIR_PARAM, SORT_PARAM, SortLink, SortState, build_link};
pub use styles::{
    DEFAULT_ASC_CLASS, DEFAULT_DESC_CLASS, DEFAULT_HEADER_CLASS,
    DEFAULT_NONE_CLASS, SortStyles,
};
