use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    detection::{entities::RawDetection, parser},
    matching::value_objects::MatchStrategy,
};

/// Shape of the text returned by the configured vision model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Bulleted `* Croissant (x2)` lines.
    LinePattern,
    /// A JSON object mapping item names to counts, possibly wrapped in prose.
    JsonObject,
    /// A single free-text caption describing one item.
    Caption,
}

impl ResponseFormat {
    pub fn parse(self, raw: &str) -> Vec<RawDetection> {
        match self {
            ResponseFormat::LinePattern => parser::parse_line_items(raw),
            ResponseFormat::JsonObject => parser::parse_json_object(raw),
            ResponseFormat::Caption => parser::parse_caption(raw),
        }
    }

    pub fn match_strategy(self) -> MatchStrategy {
        match self {
            ResponseFormat::LinePattern | ResponseFormat::JsonObject => MatchStrategy::Extract,
            ResponseFormat::Caption => MatchStrategy::CaptionScan,
        }
    }

    pub fn expects_json(self) -> bool {
        self == ResponseFormat::JsonObject
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "line_pattern" | "lines" => Ok(ResponseFormat::LinePattern),
            "json_object" | "json" => Ok(ResponseFormat::JsonObject),
            "caption" => Ok(ResponseFormat::Caption),
            other => Err(format!(
                "unknown response format '{other}', expected lines, json or caption"
            )),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseFormat::LinePattern => f.write_str("line_pattern"),
            ResponseFormat::JsonObject => f.write_str("json_object"),
            ResponseFormat::Caption => f.write_str("caption"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("lines".parse::<ResponseFormat>(), Ok(ResponseFormat::LinePattern));
        assert_eq!("line-pattern".parse::<ResponseFormat>(), Ok(ResponseFormat::LinePattern));
        assert_eq!("JSON".parse::<ResponseFormat>(), Ok(ResponseFormat::JsonObject));
        assert_eq!("caption".parse::<ResponseFormat>(), Ok(ResponseFormat::Caption));
        assert!("yaml".parse::<ResponseFormat>().is_err());
    }

    #[test]
    fn test_caption_uses_caption_scan() {
        assert_eq!(
            ResponseFormat::Caption.match_strategy(),
            MatchStrategy::CaptionScan
        );
        assert_eq!(
            ResponseFormat::JsonObject.match_strategy(),
            MatchStrategy::Extract
        );
    }
}
