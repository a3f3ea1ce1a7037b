use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::detection::entities::RawDetection;

/// `* Croissant (x2)`, `- Baguette (×1)`, `• Danish (X3)`.
static LINE_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*[*\-•][ \t]*(.+?)[ \t]*\([x×][ \t]*(\d+)\)")
        .expect("line item pattern is valid")
});

/// Smallest `{...}` block in the text.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*?\}").expect("json object pattern is valid"));

/// Extracts one detection per bulleted `Name (xN)` line, ignoring everything else.
pub fn parse_line_items(raw: &str) -> Vec<RawDetection> {
    LINE_ITEM
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = caps[1].trim();
            let quantity = match caps[2].parse::<u32>() {
                Ok(quantity) if quantity >= 1 => quantity,
                _ => {
                    tracing::warn!("Rejected quantity '{}' for '{}'", &caps[2], name);
                    return None;
                }
            };

            (!name.is_empty()).then(|| RawDetection::new(name, quantity))
        })
        .collect()
}

/// Extracts detections from a `{"name": count}` object embedded in the text.
///
/// The first brace-delimited block is tried before the whole text. When
/// neither parses as a JSON object the result is empty.
pub fn parse_json_object(raw: &str) -> Vec<RawDetection> {
    let object = JSON_OBJECT
        .find(raw)
        .and_then(|m| serde_json::from_str::<Map<String, Value>>(m.as_str()).ok())
        .or_else(|| serde_json::from_str::<Map<String, Value>>(raw.trim()).ok());

    let Some(object) = object else {
        tracing::debug!("No JSON object found in model output");
        return Vec::new();
    };

    object
        .into_iter()
        .filter_map(|(name, value)| {
            let name = name.trim();
            if name.is_empty() {
                return None;
            }

            match quantity_from_value(&value) {
                Some(quantity) => Some(RawDetection::new(name, quantity)),
                None => {
                    tracing::warn!("Rejected quantity {} for '{}'", value, name);
                    None
                }
            }
        })
        .collect()
}

/// Treats the whole caption as a single detected item.
pub fn parse_caption(raw: &str) -> Vec<RawDetection> {
    let caption = raw.trim();
    if caption.is_empty() {
        return Vec::new();
    }

    vec![RawDetection::new(caption, 1)]
}

/// Accepts whole numbers of at least one, including `2.0`.
fn quantity_from_value(value: &Value) -> Option<u32> {
    let Value::Number(number) = value else {
        return None;
    };

    let quantity = match number.as_u64() {
        Some(quantity) => quantity,
        None => {
            let float = number.as_f64()?;
            if float.fract() != 0.0 || float < 1.0 || float > f64::from(u32::MAX) {
                return None;
            }
            float as u64
        }
    };

    u32::try_from(quantity).ok().filter(|q| *q >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(detections: &[RawDetection]) -> Vec<(&str, u32)> {
        detections
            .iter()
            .map(|d| (d.name.as_str(), d.quantity))
            .collect()
    }

    #[test]
    fn test_line_items_ignore_prose() {
        let detections =
            parse_line_items("* Croissant (x2)\nsome unrelated prose\n- Baguette (×1)");

        assert_eq!(pairs(&detections), [("Croissant", 2), ("Baguette", 1)]);
    }

    #[test]
    fn test_line_items_accept_all_markers() {
        let raw = "Here is what I see:\n• Pain au Chocolat (X3)\n  * Cinnamon Roll  (x 4)\n- Danish (×10)";

        assert_eq!(
            pairs(&parse_line_items(raw)),
            [("Pain au Chocolat", 3), ("Cinnamon Roll", 4), ("Danish", 10)]
        );
    }

    #[test]
    fn test_line_items_skip_unbulleted_and_zero() {
        let raw = "Croissant (x2)\n* Muffin (x0)\n* Scone (2)\n* Tart (x1)";

        assert_eq!(pairs(&parse_line_items(raw)), [("Tart", 1)]);
    }

    #[test]
    fn test_line_items_empty_when_nothing_matches() {
        assert!(parse_line_items("I could not identify any bakery items.").is_empty());
        assert!(parse_line_items("").is_empty());
    }

    #[test]
    fn test_json_object_inside_prose() {
        let detections =
            parse_json_object(r#"Here you go: {"Croissant": 2, "Baguette": 1} thanks"#);

        assert_eq!(pairs(&detections), [("Croissant", 2), ("Baguette", 1)]);
    }

    #[test]
    fn test_json_object_in_markdown_fence() {
        let raw = "```json\n{\n  \"Danish\": 3\n}\n```";

        assert_eq!(pairs(&parse_json_object(raw)), [("Danish", 3)]);
    }

    #[test]
    fn test_json_object_invalid_is_empty() {
        assert!(parse_json_object("no structured answer here [1, 2]").is_empty());
        assert!(parse_json_object("{not json at all}").is_empty());
    }

    #[test]
    fn test_json_object_rejects_invalid_quantities() {
        let raw = r#"{"Croissant": 2, "Scone": 0, "Tart": -1, "Muffin": 1.5, "Danish": "two", "Roll": 3.0}"#;

        assert_eq!(pairs(&parse_json_object(raw)), [("Croissant", 2), ("Roll", 3)]);
    }

    #[test]
    fn test_json_object_falls_back_to_whole_text() {
        // The first `{...}` block is `{"tray": {"Croissant": 2}` which is not valid JSON,
        // so the whole text is parsed; the nested object is not a quantity.
        let raw = r#"{"tray": {"Croissant": 2}, "Baguette": 1}"#;

        assert_eq!(pairs(&parse_json_object(raw)), [("Baguette", 1)]);
    }

    #[test]
    fn test_caption_is_single_detection() {
        assert_eq!(
            pairs(&parse_caption("  a croissant on a white plate \n")),
            [("a croissant on a white plate", 1)]
        );
        assert!(parse_caption("   ").is_empty());
    }
}
