use url::form_urlencoded;

/// Ordered, multi-valued query string parameters.
///
/// Pairs keep the order they were parsed or pushed in and repeated keys are
/// kept as separate entries, so `?tag=a&page=2&tag=b` encodes back in the
/// same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` query string. A leading
    /// `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Last value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(
        &'a self,
        key: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replaces every value of `key` with a single `value` appended at the
    /// end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.remove(&key);
        self.pairs.push((key, value.into()));
    }

    /// Removes every value of `key`, returning the last one.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let mut last = None;
        self.pairs.retain_mut(|(k, v)| {
            if k == key {
                last = Some(std::mem::take(v));
                false
            } else {
                true
            }
        });
        last
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-urlencodes every pair in order, without a leading `?`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.pairs
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_repeats() {
        let params = QueryParams::parse("?tag=a&page=2&tag=b");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("tag", "a"), ("page", "2"), ("tag", "b")]);
        assert_eq!(params.get("tag"), Some("b"));
        assert_eq!(params.get_all("tag").collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn parse_decodes_plus_and_percent() {
        let params = QueryParams::parse("q=hello+world&city=S%C3%A3o+Paulo");

        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("city"), Some("São Paulo"));
    }

    #[test]
    fn remove_drops_every_value_and_returns_last() {
        let mut params = QueryParams::parse("sort=a&page=1&sort=b");

        assert_eq!(params.remove("sort"), Some("b".to_string()));
        assert!(!params.contains_key("sort"));
        assert_eq!(params.encode(), "page=1");
        assert_eq!(params.remove("sort"), None);
    }

    #[test]
    fn set_replaces_all_values() {
        let mut params = QueryParams::parse("dir=asc&page=1&dir=desc");
        params.set("dir", "asc");

        assert_eq!(params.encode(), "page=1&dir=asc");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let mut params = QueryParams::new();
        params.push("q", "a&b c");
        params.push("next", "/x?y=1");

        assert_eq!(params.encode(), "q=a%26b+c&next=%2Fx%3Fy%3D1");
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert_eq!(QueryParams::new().encode(), "");
    }
}
