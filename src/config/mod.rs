use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

/// Identity-provider wiring. The provider is an external collaborator; the
/// client only needs enough of its configuration to build the sign-in and
/// sign-out redirect URLs, plus an optional static token for non-interactive
/// use.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub redirect_uri: String,
    #[serde(default)]
    pub post_logout_redirect_uri: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    pub access_token: Option<String>,
}

fn default_scope() -> String {
    "openid profile".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

fn default_min_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Config = serde_yaml::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url not configured");
        }

        let has_static_token = self
            .auth
            .access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        let has_provider = !self.auth.authority.is_empty() && !self.auth.client_id.is_empty();

        if !has_static_token && !has_provider {
            anyhow::bail!("auth requires either access_token or authority + client_id");
        }

        Ok(())
    }
}
