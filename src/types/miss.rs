use thiserror::Error;

/// A per-rule resolution miss recorded during evaluation.
///
/// Misses are non-fatal: the rule contributes no label for that entry and
/// the remaining rules still run. A working value absent from a rule's
/// allow-list is designed filtering, not a miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Miss {
    #[error("rule '{target_label}': source field '{source_field}' missing from record")]
    MissingField {
        target_label: String,
        source_field: String,
    },

    #[error(
        "rule '{target_label}': split index {index} out of range for '{source_field}' ({tokens} tokens)"
    )]
    SplitOutOfRange {
        target_label: String,
        source_field: String,
        index: usize,
        tokens: usize,
    },
}
