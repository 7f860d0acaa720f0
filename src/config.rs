use std::env;

pub const DEFAULT_API_URL: &str = "https://api.deepinfra.com/v1/openai/images/generations";
pub const DEFAULT_MODEL: &str = "stabilityai/sdxl-turbo";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let token = env::var("DEEPINFRA_TOKEN").ok();

        Config {
            token,
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert!(config.token.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "stabilityai/sdxl-turbo");
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::new()
            .with_token("di-test")
            .with_model("stabilityai/sd3.5")
            .with_api_url("http://localhost:9999/generate");

        assert_eq!(config.token.as_deref(), Some("di-test"));
        assert_eq!(config.model, "stabilityai/sd3.5");
        assert_eq!(config.api_url, "http://localhost:9999/generate");
    }

    #[test]
    fn test_from_env_reads_token() {
        env::set_var("DEEPINFRA_TOKEN", "di-from-env");
        let config = Config::from_env();
        assert_eq!(config.token.as_deref(), Some("di-from-env"));
        env::remove_var("DEEPINFRA_TOKEN");
    }
}
