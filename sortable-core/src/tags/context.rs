use serde_json::Value;

use crate::{query::RequestState, sorting::SortStyles};

static NO_VARIABLES: Value = Value::Null;

/// Lookup of template variables by dotted path (`user.name`, `columns.0`).
pub trait Variables {
    /// Returns the rendered value at `path`, or `None` when the path does
    /// not resolve to a scalar.
    fn lookup(&self, path: &str) -> Option<String>;
}

impl Variables for Value {
    fn lookup(&self, path: &str) -> Option<String> {
        let node = path.split('.').try_fold(self, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => {
                segment.parse::<usize>().ok().and_then(|idx| items.get(idx))
            }
            _ => None,
        })?;

        match node {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Everything a sortable node needs to render for one request.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    request: &'a RequestState,
    styles: &'a SortStyles,
    variables: &'a Value,
}

impl<'a> RenderContext<'a> {
    pub fn new(request: &'a RequestState, styles: &'a SortStyles) -> Self {
        Self {
            request,
            styles,
            variables: &NO_VARIABLES,
        }
    }

    pub fn with_variables(mut self, variables: &'a Value) -> Self {
        self.variables = variables;
        self
    }

    pub fn request(&self) -> &'a RequestState {
        self.request
    }

    pub fn styles(&self) -> &'a SortStyles {
        self.styles
    }
}

impl Variables for RenderContext<'_> {
    fn lookup(&self, path: &str) -> Option<String> {
        self.variables.lookup(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_lookup_walks_objects_and_arrays() {
        let vars = json!({
            "labels": { "name": "Full name" },
            "columns": ["age", "city"],
            "count": 3,
            "flag": true,
        });

        assert_eq!(vars.lookup("labels.name").as_deref(), Some("Full name"));
        assert_eq!(vars.lookup("columns.1").as_deref(), Some("city"));
        assert_eq!(vars.lookup("count").as_deref(), Some("3"));
        assert_eq!(vars.lookup("flag").as_deref(), Some("true"));
    }

    #[test]
    fn missing_or_composite_values_do_not_resolve() {
        let vars = json!({ "labels": { "name": "x" }, "nothing": null });

        assert_eq!(vars.lookup("labels"), None);
        assert_eq!(vars.lookup("labels.age"), None);
        assert_eq!(vars.lookup("nothing"), None);
        assert_eq!(vars.lookup("columns.0"), None);
    }

    #[test]
    fn context_without_variables_resolves_nothing() {
        let request = RequestState::default();
        let styles = SortStyles::default();
        let ctx = RenderContext::new(&request, &styles);

        assert_eq!(ctx.lookup("anything"), None);
    }
}
