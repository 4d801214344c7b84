use super::value::ResolvableValue;
use crate::{
    error::{Result, SortableError},
    sorting::{DEFAULT_HEADER_CLASS, SortDirection},
};

/// One whitespace-separated piece of a tag body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text with surrounding quotes removed.
    pub text: String,
    /// Whether the token was written inside quotes.
    pub quoted: bool,
}

/// Splits a tag body on whitespace, keeping quoted runs together.
///
/// `sortable_header name "Full name"` yields three tokens; the last one is
/// marked as quoted and has its quotes stripped.
pub fn split_contents(body: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in body.chars() {
        match quote {
            Some(open) if ch == open => {
                quote = None;
                current.push(ch);
            }
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                current.push(ch);
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(finish_token(std::mem::take(&mut current)));
                }
            }
            None => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(finish_token(current));
    }

    tokens
}

fn finish_token(raw: String) -> Token {
    let quoted = raw.len() >= 2
        && (raw.starts_with('"') && raw.ends_with('"')
            || raw.starts_with('\'') && raw.ends_with('\''));
    let text = raw.trim_matches(|c| c == '"' || c == '\'').trim().to_string();
    Token { text, quoted }
}

fn argument(token: &Token) -> ResolvableValue {
    if token.quoted {
        ResolvableValue::Literal(token.text.clone())
    } else {
        ResolvableValue::Expression(token.text.clone())
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A parsed sortable tag invocation.
///
/// Built once when a template is compiled and reused for every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    /// Name the tag was invoked with, e.g. `sortable_header`.
    pub tag: String,
    /// Field written to the `sort` parameter, without its sign prefix.
    pub field: ResolvableValue,
    /// Link text and `title` attribute.
    pub title: ResolvableValue,
    /// Extra class for the `<th>` rendered by `sortable_header`.
    pub header_class: ResolvableValue,
    /// Direction a click asks for when the field is not the active one.
    pub default_direction: SortDirection,
}

impl SortDirective {
    /// Parses a tag body such as `sortable_link -score "Score"`.
    pub fn parse(body: &str) -> Result<Self> {
        Self::from_tokens(split_contents(body))
    }

    /// Builds a directive from already split tokens:
    /// `tag field [title] [extra_class]`.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        let [tag, field, rest @ ..] = tokens.as_slice() else {
            let directive = tokens
                .first()
                .map_or_else(|| "sortable".to_string(), |t| t.text.clone());
            return Err(SortableError::syntax(
                directive,
                "takes at least 1 argument",
            ));
        };

        let (default_direction, name) =
            if let Some(name) = field.text.strip_prefix('-') {
                (SortDirection::Desc, name)
            } else if let Some(name) = field.text.strip_prefix('+') {
                (SortDirection::Asc, name)
            } else {
                (SortDirection::Asc, field.text.as_str())
            };

        let field_value = if field.quoted {
            ResolvableValue::Literal(name.to_string())
        } else {
            ResolvableValue::Expression(name.to_string())
        };

        let title = rest.first().map_or_else(
            || ResolvableValue::Literal(capitalize(name).trim().to_string()),
            argument,
        );
        let header_class = rest.get(1).map_or_else(
            || ResolvableValue::Literal(DEFAULT_HEADER_CLASS.to_string()),
            argument,
        );

        Ok(Self {
            tag: tag.text.clone(),
            field: field_value,
            title,
            header_class,
            default_direction,
        })
    }
}
