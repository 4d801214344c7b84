use super::context::Variables;

/// A directive argument that is resolved at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvableValue {
    /// Variable path looked up in the render context. Falls back to the
    /// path itself when the lookup misses.
    Expression(String),
    /// Fixed text, used verbatim.
    Literal(String),
}

impl ResolvableValue {
    /// Resolves the value against `vars`. Never fails.
    pub fn resolve<V: Variables + ?Sized>(&self, vars: &V) -> String {
        match self {
            ResolvableValue::Literal(text) => text.clone(),
            ResolvableValue::Expression(path) => {
                vars.lookup(path).unwrap_or_else(|| {
                    tracing::trace!(path = %path, "variable missing, using literal");
                    path.clone()
                })
            }
        }
    }

    /// The text the value was written as in the template.
    pub fn source(&self) -> &str {
        match self {
            ResolvableValue::Expression(text)
            | ResolvableValue::Literal(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expression_resolves_from_variables() {
        let vars = json!({ "labels": { "age": "Age (years)" } });
        let value = ResolvableValue::Expression("labels.age".into());

        assert_eq!(value.resolve(&vars), "Age (years)");
    }

    #[test]
    fn expression_falls_back_to_source() {
        let vars = json!({});
        let value = ResolvableValue::Expression("Name".into());

        assert_eq!(value.resolve(&vars), "Name");
        assert_eq!(value.source(), "Name");
    }

    #[test]
    fn literal_ignores_variables() {
        let vars = json!({ "name": "shadowed" });
        let value = ResolvableValue::Literal("name".into());

        assert_eq!(value.resolve(&vars), "name");
    }
}
