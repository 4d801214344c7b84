use super::params::QueryParams;

/// The parts of an incoming request the sortable tags read: its path and
/// its query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    path: String,
    query: QueryParams,
}

impl RequestState {
    pub fn new(path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Builds the state from a path and the raw query string, the way
    /// `http::Uri::path` and `http::Uri::query` hand them out.
    pub fn from_parts(path: &str, query: Option<&str>) -> Self {
        Self::new(path, query.map(QueryParams::parse).unwrap_or_default())
    }

    /// Parses a request target such as `/people?sort=name&dir=asc`. A
    /// trailing `#fragment` is discarded.
    pub fn from_target(target: &str) -> Self {
        let target = target
            .split_once('#')
            .map_or(target, |(before, _)| before);
        match target.split_once('?') {
            Some((path, query)) => Self::from_parts(path, Some(query)),
            None => Self::from_parts(target, None),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }
}
