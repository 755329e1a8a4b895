use std::time::Instant;

use tracing::{debug, trace};

use crate::types::{Evaluation, LabelSet, LogRecord, Miss, RuleSpec};

pub(crate) fn evaluate(rules: &[RuleSpec], record: &LogRecord) -> Evaluation {
    let started = Instant::now();
    let mut labels = LabelSet::new();
    let mut misses = Vec::new();

    for rule in rules {
        match resolve(rule, record) {
            Resolution::Value(value) => labels.insert(rule.target_label.clone(), value),
            Resolution::Filtered => {}
            Resolution::Miss(miss) => {
                trace!(%miss, "rule skipped");
                misses.push(miss);
            }
        }
    }

    if !misses.is_empty() {
        debug!(misses = misses.len(), "record left rules unresolved");
    }

    Evaluation::new(labels, misses, started.elapsed())
}

enum Resolution {
    Value(String),
    /// Working value absent from the rule's allow-list. Not a miss.
    Filtered,
    Miss(Miss),
}

/// Resolve one rule against one record: field lookup, optional token
/// selection, optional allow-list translation. All-or-nothing per rule.
fn resolve(rule: &RuleSpec, record: &LogRecord) -> Resolution {
    let Some(raw) = record.get(&rule.source_field) else {
        return Resolution::Miss(Miss::MissingField {
            target_label: rule.target_label.clone(),
            source_field: rule.source_field.clone(),
        });
    };

    let working = match rule.split {
        // Validation guarantees index >= 1.
        Some(index) => match raw.split_whitespace().nth(index - 1) {
            Some(token) => token,
            None => {
                return Resolution::Miss(Miss::SplitOutOfRange {
                    target_label: rule.target_label.clone(),
                    source_field: rule.source_field.clone(),
                    index,
                    tokens: raw.split_whitespace().count(),
                });
            }
        },
        None => raw,
    };

    match &rule.allow {
        Some(allow) => match allow.get(working) {
            Some(mapped) => Resolution::Value(mapped.clone()),
            None => Resolution::Filtered,
        },
        None => Resolution::Value(working.to_owned()),
    }
}
