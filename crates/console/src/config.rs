use anyhow::Context;
use protocol::config::{ConsoleConfig, ServiceConfig};
use std::path::Path;

/// Loads the console config, applying the `--base-url` override. A missing
/// config file is tolerated when an override supplies the base URL.
pub(crate) fn load_console_config(
    path: &Path,
    base_url_override: Option<&str>,
) -> anyhow::Result<ConsoleConfig> {
    let mut config = if path.exists() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str::<ConsoleConfig>(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?
    } else if base_url_override.is_some() {
        ConsoleConfig {
            service: ServiceConfig {
                base_url: String::new(),
                analyze_path: None,
                timeout_ms: None,
            },
        }
    } else {
        anyhow::bail!("config {} not found", path.display());
    };
    if let Some(base_url) = base_url_override {
        config.service.base_url = base_url.to_string();
    }
    validate_console_config(&config)?;
    Ok(config)
}

fn validate_console_config(config: &ConsoleConfig) -> anyhow::Result<()> {
    if config.service.base_url.trim().is_empty() {
        anyhow::bail!("service.base_url must not be empty");
    }
    if config.service.timeout_ms() == 0 {
        anyhow::bail!("service.timeout_ms must be greater than zero");
    }
    Ok(())
}
