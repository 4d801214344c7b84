use serde::{Deserialize, Serialize};
use std::fmt;

use super::styles::SortStyles;

/// Sort direction as carried by the `dir` query parameter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Strict parse of a query value: only `asc` and `desc` are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Lenient parse used for incoming requests: anything that is not
    /// exactly `asc` or `desc` becomes `asc`.
    pub fn normalize(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub const fn inverse(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn css_class(self, styles: &SortStyles) -> &str {
        match self {
            SortDirection::Asc => &styles.asc_class,
            SortDirection::Desc => &styles.desc_class,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
