pub mod image_client;

use crate::{
    config::Config,
    error::{AssetGenError, Result},
};

pub use image_client::ImageClient;

#[derive(Clone, Debug)]
pub struct DeepInfraClient {
    image_client: ImageClient,
}

impl DeepInfraClient {
    pub fn new(config: Config) -> Result<Self> {
        let token = config
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AssetGenError::ConfigError("DEEPINFRA_TOKEN environment variable not set".into())
            })?;

        let http = reqwest::Client::new();

        Ok(Self {
            image_client: ImageClient::new(http, config.api_url, token, config.model),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
