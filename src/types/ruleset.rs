use std::fmt;

use super::error::ConfigError;
use super::labels::LabelSet;
use super::record::LogRecord;
use super::report::Evaluation;
use super::rule::RuleSpec;

/// Builder for constructing a [`RuleSet`].
///
/// Starts from the built-in default rules (`method`, `status`, `addr`,
/// `type`, `isError`); user rules are appended after them, so a user rule
/// naming the same target label overrides the default whenever it resolves.
///
/// # Example
///
/// ```
/// use relabel::{LogRecord, RuleSetBuilder, RuleSpec};
///
/// let ruleset = RuleSetBuilder::new()
///     .rule(RuleSpec::new("vhost", "host"))
///     .compile()
///     .unwrap();
///
/// let record = LogRecord::new()
///     .set("request", "GET /index.html HTTP/1.1")
///     .set("status", "200")
///     .set("host", "example.com");
///
/// let labels = ruleset.evaluate(&record);
/// assert_eq!(labels.get("method"), Some("GET"));
/// assert_eq!(labels.get("vhost"), Some("example.com"));
/// ```
#[derive(Debug)]
pub struct RuleSetBuilder {
    rules: Vec<RuleSpec>,
}

impl RuleSetBuilder {
    /// Start from the built-in default rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: crate::defaults::default_rules(),
        }
    }

    /// Start with no rules at all, for callers that replace the default
    /// table entirely.
    #[must_use]
    pub fn without_defaults() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append one rule. A later rule overwrites an earlier rule's label
    /// when both share a target label and the later one resolves.
    #[must_use]
    pub fn rule(mut self, spec: RuleSpec) -> Self {
        self.rules.push(spec);
        self
    }

    /// Append every rule from an iterator, preserving order.
    #[must_use]
    pub fn rules(mut self, specs: impl IntoIterator<Item = RuleSpec>) -> Self {
        self.rules.extend(specs);
        self
    }

    /// Validate the collected rules into an immutable [`RuleSet`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any rule has an empty target label, an
    /// empty source field, or a split index of zero.
    pub fn compile(self) -> Result<RuleSet, ConfigError> {
        crate::validate::compile(self.rules)
    }
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable, validated sequence of relabeling rules.
///
/// Thread-safe and designed to live behind `Arc`: evaluation takes `&self`,
/// blocks on nothing, and allocates fresh outputs per call.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub(crate) rules: Vec<RuleSpec>,
}

impl RuleSet {
    /// Map one parsed log entry to its metric labels.
    ///
    /// Rules that fail to resolve contribute nothing; use
    /// [`evaluate_detailed()`](Self::evaluate_detailed) to see why.
    #[must_use]
    pub fn evaluate(&self, record: &LogRecord) -> LabelSet {
        crate::evaluate::evaluate(&self.rules, record).into_labels()
    }

    /// Like [`evaluate()`](Self::evaluate), additionally reporting the
    /// per-rule misses and the wall-clock duration.
    pub fn evaluate_detailed(&self, record: &LogRecord) -> Evaluation {
        crate::evaluate::evaluate(&self.rules, record)
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    /// The built-in default rules alone. The table is known-valid, so no
    /// validation step is involved.
    fn default() -> Self {
        Self {
            rules: crate::defaults::default_rules(),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({} rules)", self.rules.len())
    }
}
