use crate::{
    error::{AssetGenError, Result},
    models::{DeepInfraImageResponse, ImageGenerationRequest, ImageGenerationResponse},
};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

#[derive(Clone, Debug)]
pub struct ImageClient {
    http: Client,
    api_url: String,
    token: String,
    default_model: String,
}

impl ImageClient {
    pub fn new(http: Client, api_url: String, token: String, default_model: String) -> Self {
        Self {
            http,
            api_url,
            token,
            default_model,
        }
    }

    fn build_payload(&self, request: &ImageGenerationRequest) -> Value {
        json!({
            "prompt": request.prompt,
            "size": request.size.as_deref().unwrap_or("1024x1024"),
            "model": request.model_id.as_deref().unwrap_or(&self.default_model),
            "n": request.num_images.unwrap_or(1),
            "response_format": "b64_json"
        })
    }

    pub async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        let model = request
            .model_id
            .clone()
            .unwrap_or_else(|| self.default_model.clone());

        let payload = self.build_payload(&request);

        log::info!("Generating image with model: {}", model);

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AssetGenError::RequestError(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            return Err(AssetGenError::ResponseError(format!(
                "HTTP {}: {}",
                status, text
            )));
        }

        let api_response: DeepInfraImageResponse = response
            .json()
            .await
            .map_err(|e| AssetGenError::ResponseError(e.to_string()))?;

        let first = api_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AssetGenError::ResponseError("No images generated".into()))?;

        let image_data = first.b64_json.ok_or_else(|| {
            AssetGenError::ResponseError("Response contained no b64_json payload".into())
        })?;

        Ok(ImageGenerationResponse { image_data, model })
    }
}
