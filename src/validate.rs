use crate::{ConfigError, RuleSet, RuleSpec};

pub(crate) fn compile(rules: Vec<RuleSpec>) -> Result<RuleSet, ConfigError> {
    for (index, rule) in rules.iter().enumerate() {
        check_rule(index, rule)?;
    }
    Ok(RuleSet { rules })
}

fn check_rule(index: usize, rule: &RuleSpec) -> Result<(), ConfigError> {
    if rule.target_label.is_empty() {
        return Err(ConfigError::EmptyTargetLabel { index });
    }
    if rule.source_field.is_empty() {
        return Err(ConfigError::EmptySourceField {
            target_label: rule.target_label.clone(),
        });
    }
    // Token positions are 1-based; zero can only come from bad configuration.
    if rule.split == Some(0) {
        return Err(ConfigError::InvalidSplit {
            target_label: rule.target_label.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{ConfigError, RuleSetBuilder, RuleSpec};

    #[test]
    fn compile_defaults_succeeds() {
        let result = RuleSetBuilder::new().compile();
        assert!(result.is_ok());
    }

    #[test]
    fn compile_empty_target_label() {
        let result = RuleSetBuilder::without_defaults()
            .rule(RuleSpec::new("", "request"))
            .compile();
        assert!(matches!(
            result,
            Err(ConfigError::EmptyTargetLabel { index: 0 })
        ));
    }

    #[test]
    fn compile_empty_target_label_reports_position() {
        let result = RuleSetBuilder::new()
            .rule(RuleSpec::new("", "request"))
            .compile();
        // Five defaults precede the bad rule.
        assert!(matches!(
            result,
            Err(ConfigError::EmptyTargetLabel { index: 5 })
        ));
    }

    #[test]
    fn compile_empty_source_field() {
        let result = RuleSetBuilder::without_defaults()
            .rule(RuleSpec::new("method", ""))
            .compile();
        assert!(matches!(
            result,
            Err(ConfigError::EmptySourceField { target_label }) if target_label == "method"
        ));
    }

    #[test]
    fn compile_zero_split_index() {
        let result = RuleSetBuilder::without_defaults()
            .rule(RuleSpec::new("addr", "request").split(0))
            .compile();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSplit { target_label }) if target_label == "addr"
        ));
    }

    #[test]
    fn compile_split_one_is_valid() {
        let result = RuleSetBuilder::without_defaults()
            .rule(RuleSpec::new("method", "request").split(1))
            .compile();
        assert!(result.is_ok());
    }

    #[test]
    fn first_invalid_rule_wins() {
        let result = RuleSetBuilder::without_defaults()
            .rule(RuleSpec::new("", "request"))
            .rule(RuleSpec::new("method", ""))
            .compile();
        assert!(matches!(
            result,
            Err(ConfigError::EmptyTargetLabel { index: 0 })
        ));
    }
}
