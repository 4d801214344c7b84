use url::form_urlencoded;

use super::{direction::SortDirection, styles::SortStyles};
use crate::query::{QueryParams, RequestState};

/// Query parameter naming the active sort field.
pub const SORT_PARAM: &str = "sort";
/// Query parameter naming the active sort direction.
pub const DIR_PARAM: &str = "dir";

/// Sort state read from a request's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    /// Active sort field; `None` when `sort` is missing or empty.
    pub field: Option<String>,
    /// Normalized `dir` value; `None` only when the query had no `dir` at
    /// all.
    pub direction: Option<SortDirection>,
    /// Every other parameter, in request order.
    pub remaining: QueryParams,
}

impl SortState {
    pub fn from_query(query: &QueryParams) -> Self {
        let mut remaining = query.clone();
        let field = remaining
            .remove(SORT_PARAM)
            .filter(|value| !value.is_empty());
        let direction = remaining
            .remove(DIR_PARAM)
            .map(|value| SortDirection::normalize(&value));

        Self {
            field,
            direction,
            remaining,
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    /// Direction the page is currently sorted in, from the point of view of
    /// `field`. Without an explicit `dir`, the active field reads as
    /// ascending and every other field as descending.
    pub fn direction_for(&self, field: &str) -> SortDirection {
        self.direction.unwrap_or(if self.is_sorted_by(field) {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        })
    }
}

/// Result of a link computation for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortLink {
    /// Next URL with `&` escaped as `&amp;`, ready for an `href` attribute.
    pub url: String,
    /// Next URL as a plain request target (unescaped).
    pub target: String,
    /// Class describing the column's current sort state.
    pub css_class: String,
    /// Whether the column is the active sort field.
    pub is_current: bool,
    /// Direction the outgoing link asks for.
    pub next_direction: SortDirection,
}

/// Computes the URL that sorts by `field` and the class describing its
/// current state.
///
/// Clicking the active column flips its direction; any other column starts
/// at `default_direction`. Parameters other than `sort` and `dir` are carried
/// over in their original order.
pub fn build_link(
    request: &RequestState,
    field: &str,
    default_direction: SortDirection,
    styles: &SortStyles,
) -> SortLink {
    let state = SortState::from_query(request.query());
    let is_current = state.is_sorted_by(field);
    let current = state.direction_for(field);

    let next_direction = if is_current {
        current.inverse()
    } else {
        default_direction
    };
    let css_class = styles
        .class_for(is_current.then_some(current))
        .to_string();

    let mut params = QueryParams::new();
    params.push(DIR_PARAM, next_direction.as_str());
    params.extend(state.remaining.iter());

    let encoded_field: String =
        form_urlencoded::byte_serialize(field.as_bytes()).collect();
    let target = format!(
        "{}?{SORT_PARAM}={encoded_field}&{}",
        request.path(),
        params.encode()
    );
    let url = target.replace('&', "&amp;");

    tracing::trace!(
        field,
        is_current,
        next = %next_direction,
        class = %css_class,
        "built sortable link"
    );

    SortLink {
        url,
        target,
        css_class,
        is_current,
        next_direction,
    }
}
