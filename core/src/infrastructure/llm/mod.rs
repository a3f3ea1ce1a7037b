use crate::domain::{
    checkout::{policies::TrayImage, ports::VisionClient},
    common::{VisionConfig, VisionProvider, entities::app_errors::CoreError},
};

pub mod gemini_client;
pub mod huggingface_client;

pub use gemini_client::GeminiVisionClient;
pub use huggingface_client::HuggingFaceCaptionClient;

/// Vision backend selected from configuration.
#[derive(Debug, Clone)]
pub enum VisionBackend {
    Gemini(GeminiVisionClient),
    HuggingFace(HuggingFaceCaptionClient),
}

impl VisionBackend {
    pub fn from_config(config: &VisionConfig, json_output: bool) -> Result<Self, CoreError> {
        if config.api_key.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(format!(
                "an API key is required for the {} provider",
                config.provider
            )));
        }

        let backend = match config.provider {
            VisionProvider::Gemini => VisionBackend::Gemini(GeminiVisionClient::new(
                config.api_key.clone(),
                config.model.clone(),
                config.base_url.clone(),
                config.timeout_secs,
                json_output,
            )?),
            VisionProvider::HuggingFace => {
                VisionBackend::HuggingFace(HuggingFaceCaptionClient::new(
                    config.api_key.clone(),
                    config.model.clone(),
                    config.base_url.clone(),
                    config.timeout_secs,
                )?)
            }
        };

        tracing::info!(
            provider = %config.provider,
            model = %config.model,
            "Vision backend configured"
        );

        Ok(backend)
    }
}

impl VisionClient for VisionBackend {
    async fn describe_image(
        &self,
        prompt: Option<String>,
        image: TrayImage,
    ) -> Result<String, CoreError> {
        match self {
            VisionBackend::Gemini(client) => client.describe_image(prompt, image).await,
            VisionBackend::HuggingFace(client) => client.describe_image(prompt, image).await,
        }
    }
}

/// Builds the shared HTTP client with the configured timeout.
pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client, CoreError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| CoreError::InvalidConfiguration(format!("HTTP client: {}", e)))
}

/// Shortens a response body for error messages.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 500;
    if body.chars().count() <= MAX_CHARS {
        return body.to_string();
    }

    let truncated: String = body.chars().take(MAX_CHARS).collect();
    format!("{truncated}…")
}
