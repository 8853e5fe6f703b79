use std::collections::BTreeMap;
use std::fmt::{self, Write};

/// Reserved label holding the metric name.
pub const METRIC_NAME_LABEL: &str = "__name__";

/// A metric identity: label name to label value, names unique and kept sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Metric(BTreeMap<String, String>);

impl Metric {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a label, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(METRIC_NAME_LABEL)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metric {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metric = Metric::new();
        for (name, value) in iter {
            metric.insert(name, value);
        }
        metric
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut labels = self.iter().filter(|(k, _)| *k != METRIC_NAME_LABEL).peekable();

        if labels.peek().is_none() {
            return f.write_str(name.unwrap_or("{}"));
        }

        f.write_str(name.unwrap_or_default())?;
        f.write_str("{")?;
        let mut first = true;
        for (k, v) in labels {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{k}=")?;
            write_quoted(f, v)?;
        }
        f.write_str("}")
    }
}

/// Writes `value` double-quoted with Go `%q` escapes: named escapes for the
/// usual control characters, `\xNN` for other ASCII controls and `\uNNNN`
/// for non-ASCII control characters. Printable text passes through.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\x07' => f.write_str("\\a")?,
            '\x08' => f.write_str("\\b")?,
            '\x0c' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\x0b' => f.write_str("\\v")?,
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// One observation of a metric, the unit a client batches.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub metric: Metric,
    pub value: f64,
    pub timestamp_ms: i64,
}

impl Sample {
    pub fn new(metric: Metric, value: f64, timestamp_ms: i64) -> Self {
        Self {
            metric,
            value,
            timestamp_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_existing_label() {
        let mut metric = Metric::new();
        assert_eq!(metric.insert("job", "a"), None);
        assert_eq!(metric.insert("job", "b"), Some("a".to_string()));
        assert_eq!(metric.get("job"), Some("b"));
        assert_eq!(metric.len(), 1);
    }

    #[test]
    fn iter_is_sorted_by_name() {
        let metric: Metric = [("zone", "eu"), ("instance", "h1"), ("job", "a")]
            .into_iter()
            .collect();
        let names: Vec<_> = metric.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["instance", "job", "zone"]);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Metric::new().to_string(), "{}");

        let only_name: Metric = [(METRIC_NAME_LABEL, "up")].into_iter().collect();
        assert_eq!(only_name.to_string(), "up");

        let labels: Metric = [("job", "a"), ("instance", "h1")].into_iter().collect();
        assert_eq!(labels.to_string(), r#"{instance="h1", job="a"}"#);

        let full: Metric = [(METRIC_NAME_LABEL, "up"), ("job", "a")].into_iter().collect();
        assert_eq!(full.to_string(), r#"up{job="a"}"#);
    }

    #[test]
    fn display_escapes_values() {
        let metric: Metric = [("path", "a\"b")].into_iter().collect();
        assert_eq!(metric.to_string(), r#"{path="a\"b"}"#);
    }

    #[test]
    fn display_escapes_like_go_quote() {
        let metric: Metric = [
            ("a", "tab\there"),
            ("b", "del\x7f"),
            ("c", "nel\u{85}"),
            ("d", "back\\slash"),
            ("e", "caf\u{e9}"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            metric.to_string(),
            r#"{a="tab\there", b="del\x7f", c="nel\u0085", d="back\\slash", e="café"}"#
        );
    }
}
