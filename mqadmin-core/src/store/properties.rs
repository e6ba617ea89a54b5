//! Flat `key=value` property-file codec
//!
//! The registry file is a line-oriented property list inherited from the
//! original console. Keys are ordered; rendering preserves insertion
//! order so saved files are deterministic.

use crate::error::PersistenceError;

/// Ordered list of `key=value` properties
///
/// Setting an existing key overwrites its value in place. Lookup is
/// linear; the lists involved hold a handful of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyList {
    props: Vec<(String, String)>,
}

impl PropertyList {
    /// Creates an empty property list
    #[must_use]
    pub const fn new() -> Self {
        Self { props: Vec::new() }
    }

    /// Parses property-file text
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. Every
    /// other line must contain a `=`; the key is everything before the
    /// first `=` (trimmed), the value everything after it (verbatim).
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Malformed` for a non-comment line
    /// without a `=`.
    pub fn parse(content: &str) -> Result<Self, PersistenceError> {
        let mut list = Self::new();

        for line in content.lines() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let Some(eq) = trimmed.find('=') else {
                return Err(PersistenceError::Malformed {
                    key: trimmed.to_string(),
                    reason: "line is not a key=value pair".to_string(),
                });
            };

            let key = trimmed[..eq].trim_end().to_string();
            let value = trimmed[eq + 1..].to_string();
            list.set(key, value);
        }

        Ok(list)
    }

    /// Renders the list back to property-file text, one pair per line
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.props {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    /// Sets a property, overwriting any existing value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.props.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.props.push((key, value)),
        }
    }

    /// Gets a property value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Gets a property value, requiring it to be present
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Malformed` when the key is absent.
    pub fn require(&self, key: &str) -> Result<&str, PersistenceError> {
        self.get(key).ok_or_else(|| PersistenceError::Malformed {
            key: key.to_string(),
            reason: "required property is missing".to_string(),
        })
    }

    /// Parses a required numeric property
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Malformed` when the key is absent or
    /// the value does not parse.
    pub fn require_parsed<T: std::str::FromStr>(&self, key: &str) -> Result<T, PersistenceError> {
        let raw = self.require(key)?;
        raw.parse().map_err(|_| PersistenceError::Malformed {
            key: key.to_string(),
            reason: format!("value {raw:?} is not a valid number"),
        })
    }

    /// Returns the number of properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns true if the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let list = PropertyList::parse("version=2.0\nbroker.count=1\n").unwrap();
        assert_eq!(list.get("version"), Some("2.0"));
        assert_eq!(list.get("broker.count"), Some("1"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# favourite brokers\n\n! legacy comment style\nbroker.count=0\n";
        let list = PropertyList::parse(text).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_parse_value_keeps_equals_signs() {
        let list = PropertyList::parse("broker.0.password=a=b=c\n").unwrap();
        assert_eq!(list.get("broker.0.password"), Some("a=b=c"));
    }

    #[test]
    fn test_parse_rejects_bare_line() {
        let err = PropertyList::parse("not a property\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { .. }));
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut list = PropertyList::new();
        list.set("a", "1");
        list.set("b", "2");
        list.set("a", "3");
        assert_eq!(list.get("a"), Some("3"));
        assert_eq!(list.render(), "a=3\nb=2\n");
    }

    #[test]
    fn test_render_parse_round_trip() {
        let mut list = PropertyList::new();
        list.set("version", "2.0");
        list.set("broker.0.name", "broker1");
        let reparsed = PropertyList::parse(&list.render()).unwrap();
        assert_eq!(list, reparsed);
    }

    #[test]
    fn test_require_parsed_reports_bad_number() {
        let list = PropertyList::parse("broker.count=many\n").unwrap();
        let err = list.require_parsed::<i64>("broker.count").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { .. }));
    }
}
