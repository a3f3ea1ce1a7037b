use std::fmt;

use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;

use crate::{
    domain::{
        checkout::{policies::TrayImage, ports::VisionClient},
        common::entities::app_errors::CoreError,
    },
    infrastructure::llm::{http_client, truncate_body},
};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Hosted image captioning model on the Hugging Face inference API.
///
/// Captioning models take no instruction, so the prompt is ignored.
#[derive(Clone)]
pub struct HuggingFaceCaptionClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

impl fmt::Debug for HuggingFaceCaptionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceCaptionClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CaptionResponse {
    Captions(Vec<Caption>),
    Error { error: String },
}

#[derive(Debug, Deserialize)]
struct Caption {
    generated_text: String,
}

impl HuggingFaceCaptionClient {
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            api_key,
            model_name,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            client: http_client(timeout_secs)?,
        })
    }

    async fn call_caption_api(&self, image: TrayImage) -> Result<String, CoreError> {
        let url = format!("{}/models/{}", self.base_url, self.model_name);
        let mime_type = image.mime_type();

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, mime_type)
            .body(image.into_data())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Caption API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Vision API error: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read caption response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read vision response: {}", e))
        })?;

        if !status.is_success() {
            tracing::error!("Caption API error: {} - {}", status, body);
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API returned error: {} - {}",
                status,
                truncate_body(&body)
            )));
        }

        parse_caption_body(&body)
    }
}

fn parse_caption_body(body: &str) -> Result<String, CoreError> {
    let parsed: CaptionResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse caption response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse vision response: {}", e))
    })?;

    match parsed {
        CaptionResponse::Error { error } => Err(CoreError::ExternalServiceError(format!(
            "Vision API returned error: {}",
            error
        ))),
        CaptionResponse::Captions(captions) => captions
            .into_iter()
            .map(|caption| caption.generated_text)
            .find(|text| !text.trim().is_empty())
            .ok_or_else(|| CoreError::ExternalServiceError("No caption returned".to_string())),
    }
}

impl VisionClient for HuggingFaceCaptionClient {
    async fn describe_image(
        &self,
        _prompt: Option<String>,
        image: TrayImage,
    ) -> Result<String, CoreError> {
        self.call_caption_api(image).await
    }
}
