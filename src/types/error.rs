use thiserror::Error;

/// Rule validation failure, reported when a
/// [`RuleSetBuilder`](super::RuleSetBuilder) compiles its rules.
///
/// These are configuration errors, fatal to process startup; they are never
/// produced while evaluating a log entry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rule {index}: empty target label")]
    EmptyTargetLabel { index: usize },

    #[error("rule '{target_label}': empty source field")]
    EmptySourceField { target_label: String },

    #[error("rule '{target_label}': split index 0 is out of range (token positions are 1-based)")]
    InvalidSplit { target_label: String },
}
