//! Query-string parsing, merging and canonical serialization.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters percent-encoded in serialized keys and values.
///
/// Structural query-string characters plus controls. Commas and dots stay
/// literal so multiselect values (`charge=theft,assault`) and sort values
/// (`charge.desc`) read back exactly as written in a shared link.
const COMPONENT: &AsciiSet = &percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// A parsed query string: key -> value, absence meaning "use default".
///
/// Keys are independent and unordered; serialization sorts them so equal
/// stores always produce byte-identical query strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryString {
    params: BTreeMap<String, String>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`.
    ///
    /// Decoding is lenient: malformed percent-sequences pass through as-is
    /// and a repeated key keeps its last occurrence. This never fails.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut params = BTreeMap::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()).into_owned() {
            if key.is_empty() {
                continue;
            }
            params.insert(key, value);
        }
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The stored value, or the caller-supplied default when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply a batch of merge-writes: empty/absent values remove the key,
    /// everything else sets it.
    pub fn apply(&mut self, update: &QueryUpdate) {
        for (key, value) in &update.entries {
            match value {
                Some(v) if !v.is_empty() => {
                    self.params.insert(key.clone(), v.clone());
                }
                _ => {
                    self.params.remove(key);
                }
            }
        }
    }

    /// Canonical serialization without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.params {
            if !out.is_empty() {
                out.push('&');
            }
            out.extend(utf8_percent_encode(key, COMPONENT));
            out.push('=');
            out.extend(utf8_percent_encode(value, COMPONENT));
        }
        out
    }
}

impl std::fmt::Display for QueryString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query())
    }
}

/// A batch of partial updates committed as one atomic write.
#[derive(Debug, Clone, Default)]
pub struct QueryUpdate {
    pub(crate) entries: Vec<(String, Option<String>)>,
}

impl QueryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key. An empty value behaves like [`clear`](Self::clear).
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), Some(value.into())));
        self
    }

    /// Remove a key from the query string.
    #[must_use]
    pub fn clear(mut self, key: impl Into<String>) -> Self {
        self.entries.push((key.into(), None));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_leading_question_mark() {
        let qs = QueryString::parse("?page=2&perPage=25");
        assert_eq!(qs.get("page"), Some("2"));
        assert_eq!(qs.get("perPage"), Some("25"));
    }

    #[test]
    fn parse_keeps_last_duplicate() {
        let qs = QueryString::parse("page=2&page=7");
        assert_eq!(qs.get("page"), Some("7"));
    }

    #[test]
    fn parse_never_fails_on_garbage() {
        let qs = QueryString::parse("%zz=&&==&sort=charge.desc");
        assert_eq!(qs.get("sort"), Some("charge.desc"));
    }

    #[test]
    fn parse_decodes_plus_and_percent() {
        let qs = QueryString::parse("charge=grand+theft&name=R%20v%20Dudley");
        assert_eq!(qs.get("charge"), Some("grand theft"));
        assert_eq!(qs.get("name"), Some("R v Dudley"));
    }

    #[test]
    fn apply_removes_empty_values() {
        let mut qs = QueryString::parse("page=2&charge=theft");
        qs.apply(
            &QueryUpdate::new()
                .set("charge", "")
                .set("page", "1")
                .clear("sort"),
        );
        assert_eq!(qs.get("page"), Some("1"));
        assert!(!qs.contains("charge"));
    }

    #[test]
    fn canonical_serialization_is_sorted_and_stable() {
        let mut qs = QueryString::new();
        qs.apply(
            &QueryUpdate::new()
                .set("sort", "charge.desc")
                .set("page", "1")
                .set("charge", "grand theft,assault"),
        );
        insta::assert_snapshot!(qs.to_query(), @"charge=grand%20theft,assault&page=1&sort=charge.desc");
    }

    #[test]
    fn roundtrips_through_parse() {
        let qs = QueryString::parse("charge=theft,assault&page=3&sort=fine.asc");
        assert_eq!(QueryString::parse(&qs.to_query()), qs);
    }
}
