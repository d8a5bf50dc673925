//! Linter initialization from configuration

use brevity_closure::RULE_ID as CLOSURE_BODY_LENGTH;
use brevity_core::{BrevityConfig, Linter};

/// Check if a rule should be loaded based on config.
/// Returns true if: no config, no rule entry, or enabled != false
fn should_load_rule(config: Option<&BrevityConfig>, key: &str) -> bool {
    config.is_none_or(|c| c.is_enabled(key))
}

/// Build the linter: every front-end, plus each enabled rule with its settings.
pub fn init_linter(config: Option<&BrevityConfig>) -> Linter {
    let mut linter = Linter::new().with_front_end(brevity_rust::init_front_end());

    if should_load_rule(config, CLOSURE_BODY_LENGTH) {
        if let Some(settings) = config.and_then(|c| c.rule_settings(CLOSURE_BODY_LENGTH)) {
            let rule_config = brevity_closure::config_from_rule_settings(settings);
            linter.add_rule(brevity_closure::init_rule_with_config(&rule_config));
        } else {
            linter.add_rule(brevity_closure::init_rule());
        }
    } else {
        tracing::info!("rule {CLOSURE_BODY_LENGTH} disabled by config");
    }

    linter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_rule_without_config() {
        let linter = init_linter(None);
        assert_eq!(linter.rule_descriptions().len(), 1);
        assert!(linter.supported_extensions().contains("rs"));
    }

    #[test]
    fn skips_disabled_rule() {
        let config =
            BrevityConfig::from_toml("[rule.closure_body_length]\nenabled = false\n").unwrap();
        let linter = init_linter(Some(&config));
        assert!(linter.rule_descriptions().is_empty());
    }
}
