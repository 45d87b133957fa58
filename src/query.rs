//! Canonical query-string encoding shared by every parameter set.
//!
//! Pairs are collected in field order, then stably sorted by key before
//! being form-encoded. Repeated keys therefore keep the order they were
//! pushed in, while the overall string does not depend on field order.

use url::form_urlencoded;

/// Ordered collection of query pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` as given, even when `value` is empty.
    pub fn push(&mut self, key: &'static str, value: impl AsRef<str>) -> &mut Self {
        self.pairs.push((key, value.as_ref().to_owned()));
        self
    }

    /// Add `key=value` if `value` is set and non-empty.
    pub fn push_opt<T: AsRef<str>>(&mut self, key: &'static str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value.map(AsRef::<str>::as_ref).filter(|v| !v.is_empty()) {
            self.push(key, value);
        }
        self
    }

    /// Add one `key=value` pair per element, in slice order. Empty elements
    /// are kept.
    pub fn push_all<T: AsRef<str>>(&mut self, key: &'static str, values: &[T]) -> &mut Self {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Add a base-10 number; zero means unset and is skipped.
    pub fn push_nonzero(&mut self, key: &'static str, value: u32) -> &mut Self {
        if value != 0 {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Sort by key (stable) and form-encode.
    pub fn encode(mut self) -> String {
        self.pairs.sort_by_key(|(key, _)| *key);
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_encodes_to_empty_string() {
        assert_eq!(QueryPairs::new().encode(), "");
    }

    #[test]
    fn test_keys_sorted_values_keep_insertion_order() {
        let mut q = QueryPairs::new();
        q.push("sources", "b")
            .push("q", "x")
            .push("sources", "a")
            .push("domains", "z.com");
        assert_eq!(q.encode(), "domains=z.com&q=x&sources=b&sources=a");
    }

    #[test]
    fn test_skips_unset_and_zero() {
        let empty = String::new();
        let mut q = QueryPairs::new();
        q.push_opt("q", Some(&empty))
            .push_opt::<String>("qInTitle", None)
            .push_nonzero("page", 0)
            .push_nonzero("pageSize", 20);
        assert_eq!(q.encode(), "pageSize=20");
    }

    #[test]
    fn test_list_elements_are_never_dropped() {
        let mut q = QueryPairs::new();
        q.push_all("sources", &["", "cnn"]);
        assert_eq!(q.encode(), "sources=&sources=cnn");
    }

    #[test]
    fn test_values_are_form_encoded() {
        let mut q = QueryPairs::new();
        q.push("q", "crypto AND (ethereum OR \"lite coin\")")
            .push("from", "2022-02-22T22:22:22");
        assert_eq!(
            q.encode(),
            "from=2022-02-22T22%3A22%3A22&q=crypto+AND+%28ethereum+OR+%22lite+coin%22%29"
        );
    }
}
