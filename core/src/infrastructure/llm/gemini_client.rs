use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        checkout::{policies::TrayImage, ports::VisionClient},
        common::entities::app_errors::CoreError,
    },
    infrastructure::llm::{http_client, truncate_body},
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Multimodal chat model behind the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiVisionClient {
    api_key: String,
    model_name: String,
    base_url: String,
    json_output: bool,
    client: Client,
}

impl fmt::Debug for GeminiVisionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiVisionClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("json_output", &self.json_output)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiVisionClient {
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: Option<String>,
        timeout_secs: u64,
        json_output: bool,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            api_key,
            model_name,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            json_output,
            client: http_client(timeout_secs)?,
        })
    }

    fn build_request(&self, prompt: Option<String>, image: &TrayImage) -> GeminiRequest {
        let mut parts = Vec::with_capacity(2);
        if let Some(text) = prompt {
            parts.push(Part::Text { text });
        }
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type().to_string(),
                data: general_purpose::STANDARD.encode(image.data()),
            },
        });

        GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: self.json_output.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API returned error: {} - {}",
                status,
                truncate_body(&error_text)
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse vision response: {}", e))
        })?;

        extract_text(gemini_response)
    }
}

/// Joins the text parts of the first candidate, treating refusals as errors.
fn extract_text(response: GeminiResponse) -> Result<String, CoreError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        tracing::warn!("Gemini blocked the request: {}", reason);
        return Err(CoreError::ExternalServiceError(format!(
            "Vision API refused the request: {}",
            reason
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::ExternalServiceError("No response from vision API".to_string()))?;

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(CoreError::ExternalServiceError(format!(
            "Vision API returned no text (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}

impl VisionClient for GeminiVisionClient {
    async fn describe_image(
        &self,
        prompt: Option<String>,
        image: TrayImage,
    ) -> Result<String, CoreError> {
        let request = self.build_request(prompt, &image);
        self.call_gemini_api(request).await
    }
}
