mod defaults;
mod evaluate;
mod types;
mod validate;

pub use defaults::default_rules;
pub use types::{
    ConfigError, Evaluation, LabelSet, LogRecord, Miss, RuleSet, RuleSetBuilder, RuleSpec,
};
