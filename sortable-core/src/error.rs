use thiserror::Error;

/// Errors raised while compiling sortable directives and templates.
///
/// Rendering itself never fails: unresolvable arguments fall back to their
/// source text and malformed `dir` values are normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortableError {
    #[error("'{directive}' tag {message}")]
    TemplateSyntax { directive: String, message: String },

    #[error("invalid block tag '{name}'")]
    UnknownTag { name: String },

    #[error("unclosed tag starting at byte {offset}")]
    UnclosedTag { offset: usize },
}

impl SortableError {
    pub(crate) fn syntax(
        directive: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::TemplateSyntax {
            directive: directive.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SortableError>;
