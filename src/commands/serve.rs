//! Serve command.

use super::build_service;
use anyhow::Context;
use legalaid::config::LegalAidConfig;
use std::path::PathBuf;

/// Serve command.
///
/// Command-line values override the configuration. Fails before binding if
/// the rule file cannot be read or parsed.
pub async fn cmd_serve(
    mut config: LegalAidConfig,
    host: Option<String>,
    port: Option<u16>,
    rules: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(rules) = rules {
        config = config.with_rules_path(rules);
    }

    let service = build_service(&config)?;
    if service.rules_loaded() == 0 {
        tracing::warn!(
            path = %config.rules_path.display(),
            "No rules loaded; every query will receive the fallback answer"
        );
    }

    legalaid::http::serve(&config.server, service)
        .await
        .context("HTTP server failed")
}
