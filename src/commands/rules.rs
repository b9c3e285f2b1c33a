//! Rule-set inspection commands.

use super::{build_service, load_rules};
use legalaid::config::LegalAidConfig;
use legalaid::storage::FileRuleSource;

/// Categories command.
pub fn cmd_categories(config: &LegalAidConfig) -> anyhow::Result<()> {
    for category in load_rules(config)?.categories() {
        println!("{category}");
    }
    Ok(())
}

/// Scenarios command.
///
/// Accepts category aliases and falls back to every rule's scenarios when the
/// category has none, like `POST /scenarios`.
pub fn cmd_scenarios(config: &LegalAidConfig, category: &str) -> anyhow::Result<()> {
    let scenarios = build_service(config)?.scenarios(category);
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "scenarios": scenarios }))?
    );
    Ok(())
}

/// Status command.
pub fn cmd_status(config: &LegalAidConfig) -> anyhow::Result<()> {
    println!("Legalaid Status");
    println!("===============");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let config_source = config
        .source
        .as_ref()
        .map_or_else(|| "defaults".to_string(), |path| path.display().to_string());
    println!("Configuration: {config_source}");

    let source = FileRuleSource::new(&config.rules_path);
    let rules_status = if config.rules_path.exists() {
        "Available"
    } else {
        "Not found (fallback answers only)"
    };
    println!("Rule File: {rules_status}");
    println!("  Path: {}", config.rules_path.display());
    println!("  Format: {:?}", source.format());

    let rules = load_rules(config)?;
    println!("  Rules: {}", rules.len());
    for category in rules.categories() {
        println!("    {category}: {}", rules.in_category(&category).count());
    }

    println!();
    println!("Server: {}", config.server.bind_address());
    println!("  CORS origins: {}", config.server.cors_origins.join(", "));

    Ok(())
}
