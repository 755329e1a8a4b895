use std::collections::HashMap;

/// One relabeling rule: read a named source field, optionally select a
/// whitespace-delimited token from it, optionally translate the value
/// through an allow-list, and emit the result under `target_label`.
///
/// Specs are plain data with fluent construction. Validation happens when a
/// [`RuleSetBuilder`](super::RuleSetBuilder) compiles them into a
/// [`RuleSet`](super::RuleSet).
///
/// # Example
///
/// ```
/// use relabel::RuleSpec;
///
/// let rule = RuleSpec::new("method", "request")
///     .split(1)
///     .allow([("GET", "GET"), ("POST", "POST")]);
/// assert_eq!(rule.target_label, "method");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSpec {
    /// Name of the label this rule produces. Must be non-empty.
    pub target_label: String,
    /// Name of the field read from the input record. Must be non-empty.
    pub source_field: String,
    /// 1-based token position within the whitespace-split source value.
    /// `None` uses the raw value unmodified.
    #[cfg_attr(feature = "serde", serde(default))]
    pub split: Option<usize>,
    /// Accepted working values and their translations. A working value not
    /// present as a key means this rule emits no label for that entry.
    /// `None` accepts every working value unchanged.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow: Option<HashMap<String, String>>,
}

impl RuleSpec {
    pub fn new(target_label: impl Into<String>, source_field: impl Into<String>) -> Self {
        Self {
            target_label: target_label.into(),
            source_field: source_field.into(),
            split: None,
            allow: None,
        }
    }

    /// Use the `index`th (1-based) whitespace-delimited token of the source
    /// value as the working value.
    #[must_use]
    pub fn split(mut self, index: usize) -> Self {
        self.split = Some(index);
        self
    }

    /// Restrict the working value to the keys of an allow-list, replacing
    /// it with the mapped value.
    #[must_use]
    pub fn allow<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.allow = Some(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }
}
