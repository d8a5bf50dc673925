//! Rules command - shows each rule with its effective thresholds

use crate::cli::RulesArgs;
use crate::config::load_rule_config;
use brevity_core::{BrevityConfig, SeverityThreshold};
use brevity_rule_abi::RuleDescription;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RuleRow {
    #[serde(flatten)]
    pub description: RuleDescription,
    pub enabled: bool,
    pub thresholds: Vec<SeverityThreshold>,
}

pub fn rule_rows(config: Option<&BrevityConfig>) -> Vec<RuleRow> {
    let id = brevity_closure::RULE_ID;
    let settings = config.and_then(|c| c.rule_settings(id));
    let rule_config = settings
        .map(brevity_closure::config_from_rule_settings)
        .unwrap_or_default();

    vec![RuleRow {
        description: brevity_closure::description(),
        enabled: config.is_none_or(|c| c.is_enabled(id)),
        thresholds: rule_config.levels.thresholds(),
    }]
}

pub fn run_rules(args: RulesArgs) -> anyhow::Result<()> {
    let config = load_rule_config(args.config.as_ref())?;
    let rows = rule_rows(config.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let status = if row.enabled { "✓" } else { "○" };
        let limits = row
            .thresholds
            .iter()
            .map(|t| format!("{}={}", t.severity, t.max_lines))
            .collect::<Vec<_>>()
            .join("  ");
        println!(
            "  {status} {id:<24} {limits}",
            id = row.description.identifier
        );
        println!("      {}", row.description.description);
    }
    Ok(())
}
