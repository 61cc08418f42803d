use serde::Deserialize;

pub const DEFAULT_ANALYZE_PATH: &str = "/analyze";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Deserialize)]
pub struct ConsoleConfig {
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub analyze_path: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl ServiceConfig {
    pub fn analyze_path(&self) -> &str {
        self.analyze_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .unwrap_or(DEFAULT_ANALYZE_PATH)
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}

/// Joins the service base URL and a request path, tolerating trailing and
/// leading slashes on either side.
pub fn join_base_path(base: &str, path: &str) -> Result<String, String> {
    if base.trim().is_empty() {
        return Err("base_url is empty".to_string());
    }
    let normalized_base = base.trim_end_matches('/');
    let normalized_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Ok(format!("{normalized_base}{normalized_path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_service_section() {
        let input = r#"
[service]
base_url = "http://127.0.0.1:4943"
analyze_path = "/api/analyze"
timeout_ms = 15000
"#;
        let parsed: ConsoleConfig = toml::from_str(input).expect("parse");
        assert_eq!(parsed.service.base_url, "http://127.0.0.1:4943");
        assert_eq!(parsed.service.analyze_path(), "/api/analyze");
        assert_eq!(parsed.service.timeout_ms(), 15_000);
    }

    #[test]
    fn config_defaults_path_and_timeout() {
        let input = r#"
[service]
base_url = "http://127.0.0.1:4943"
"#;
        let parsed: ConsoleConfig = toml::from_str(input).expect("parse");
        assert_eq!(parsed.service.analyze_path(), DEFAULT_ANALYZE_PATH);
        assert_eq!(parsed.service.timeout_ms(), DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn config_requires_base_url() {
        let input = "[service]\n";
        let parsed: Result<ConsoleConfig, _> = toml::from_str(input);
        assert!(parsed.is_err());
    }

    #[test]
    fn join_base_path_normalizes_slashes() {
        assert_eq!(
            join_base_path("http://host:4943/", "analyze").expect("join"),
            "http://host:4943/analyze"
        );
        assert_eq!(
            join_base_path("http://host:4943", "/analyze").expect("join"),
            "http://host:4943/analyze"
        );
    }

    #[test]
    fn join_base_path_rejects_empty_base() {
        assert!(join_base_path("  ", "/analyze").is_err());
    }
}
