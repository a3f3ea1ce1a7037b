use std::{fmt, path::PathBuf, str::FromStr};

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::{
    catalog::value_objects::MenuFormat, checkout::value_objects::CheckoutSettings,
    detection::value_objects::ResponseFormat,
};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct TraybillConfig {
    pub menu: MenuConfig,
    pub vision: VisionConfig,
    pub checkout: CheckoutSettings,
}

#[derive(Clone, Debug)]
pub struct MenuConfig {
    pub path: PathBuf,
    /// Inferred from the file extension when absent.
    pub format: Option<MenuFormat>,
}

#[derive(Clone)]
pub struct VisionConfig {
    pub provider: VisionProvider,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisionProvider {
    /// Multimodal chat model answering with a list or a JSON object.
    Gemini,
    /// Hosted image captioning model.
    HuggingFace,
}

impl VisionProvider {
    pub fn default_model(self) -> &'static str {
        match self {
            VisionProvider::Gemini => "gemini-1.5-flash",
            VisionProvider::HuggingFace => "Salesforce/blip-image-captioning-large",
        }
    }

    pub fn default_response_format(self) -> ResponseFormat {
        match self {
            VisionProvider::Gemini => ResponseFormat::LinePattern,
            VisionProvider::HuggingFace => ResponseFormat::Caption,
        }
    }
}

impl FromStr for VisionProvider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(VisionProvider::Gemini),
            "huggingface" | "hugging-face" | "hf" => Ok(VisionProvider::HuggingFace),
            other => Err(format!(
                "unknown vision provider '{other}', expected gemini or huggingface"
            )),
        }
    }
}

impl fmt::Display for VisionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisionProvider::Gemini => f.write_str("gemini"),
            VisionProvider::HuggingFace => f.write_str("huggingface"),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
