use std::env;

use crate::prompt::PromptStyle;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o";

pub const DEFAULT_MEDICAL_URL: &str = "https://api.ncbi.nlm.nih.gov/lit/ctxp/v1/pubmed/";
pub const DEFAULT_LEGAL_URL: &str = "https://api.openlegaldata.io/legal/";
pub const DEFAULT_FINANCE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_FINANCE_API_KEY: &str = "demo";

/// Base URLs of the three context sources, one per [`crate::Domain`].
#[derive(Debug, Clone)]
pub struct ContextEndpoints {
    pub medical_url: String,
    pub legal_url: String,
    pub finance_url: String,
    pub finance_api_key: String,
}

impl Default for ContextEndpoints {
    fn default() -> Self {
        Self {
            medical_url: DEFAULT_MEDICAL_URL.to_string(),
            legal_url: DEFAULT_LEGAL_URL.to_string(),
            finance_url: DEFAULT_FINANCE_URL.to_string(),
            finance_api_key: DEFAULT_FINANCE_API_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Fallback credential; a non-empty key entered in the form wins.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub endpoints: ContextEndpoints,
    pub prompt_style: PromptStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            endpoints: ContextEndpoints::default(),
            prompt_style: PromptStyle::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let string_or = |key: &str, fallback: String| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let openai_api_key = lookup("OPENAI_API_KEY")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let prompt_style = lookup("PROMPT_STYLE")
            .and_then(|value| value.parse::<PromptStyle>().ok())
            .unwrap_or(defaults.prompt_style);

        let endpoints = ContextEndpoints {
            medical_url: string_or("MEDICAL_CONTEXT_URL", defaults.endpoints.medical_url),
            legal_url: string_or("LEGAL_CONTEXT_URL", defaults.endpoints.legal_url),
            finance_url: string_or("FINANCE_CONTEXT_URL", defaults.endpoints.finance_url),
            finance_api_key: string_or("FINANCE_API_KEY", defaults.endpoints.finance_api_key),
        };

        Self {
            port,
            openai_api_key,
            openai_base_url: string_or("OPENAI_BASE_URL", defaults.openai_base_url),
            model: string_or("OPENAI_MODEL", defaults.model),
            endpoints,
            prompt_style,
        }
    }

    /// Picks the credential for one request: the submitted key if present,
    /// otherwise the configured one.
    pub fn resolve_api_key(&self, submitted: Option<&str>) -> Option<String> {
        submitted
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .or_else(|| self.openai_api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.endpoints.finance_api_key, DEFAULT_FINANCE_API_KEY);
        assert_eq!(config.prompt_style, PromptStyle::Context);
    }

    #[test]
    fn reads_overrides_and_ignores_garbage_numbers() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_API_KEY", "  sk-env  "),
            ("LEGAL_CONTEXT_URL", "http://127.0.0.1:9000/legal"),
            ("PROMPT_STYLE", "persona"),
        ]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-env"));
        assert_eq!(config.endpoints.legal_url, "http://127.0.0.1:9000/legal");
        assert_eq!(config.prompt_style, PromptStyle::Persona);
    }

    #[test]
    fn completion_timeout_is_not_configurable() {
        let config = config_from(&[("COMPLETION_TIMEOUT_MS", "10")]);
        assert!(!format!("{config:?}").contains("timeout"));
    }

    #[test]
    fn submitted_key_takes_precedence() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-env")]);
        assert_eq!(config.resolve_api_key(Some("sk-form")).as_deref(), Some("sk-form"));
        assert_eq!(config.resolve_api_key(Some("   ")).as_deref(), Some("sk-env"));
        assert_eq!(config.resolve_api_key(None).as_deref(), Some("sk-env"));
        assert_eq!(config_from(&[]).resolve_api_key(Some("")), None);
    }
}
