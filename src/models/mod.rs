use serde::{Deserialize, Serialize};

/// Body of `POST /api/detect_food`
#[derive(Debug, Clone, Deserialize)]
pub struct DetectFoodRequest {
    #[serde(default)]
    pub image: Option<serde_json::Value>,
}

/// A base64 image in `data:<mime-type>;base64,<payload>` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: String,
}

impl DataUri {
    /// Parse a data URI. Only the shape is checked: an `image/<word>` mime
    /// type followed by a single-line payload. The payload is not decoded.
    pub fn parse(input: &str) -> Option<Self> {
        let rest = input.strip_prefix("data:")?;
        let (mime_type, data) = rest.split_once(";base64,")?;

        let subtype = mime_type.strip_prefix("image/")?;
        if subtype.is_empty()
            || !subtype
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return None;
        }

        if data.contains(|c| c == '\n' || c == '\r') {
            return None;
        }

        Some(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    pub fn to_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// JSON the model is asked to return inside `choices[0].message.content`
#[derive(Debug, Clone, Deserialize)]
pub struct NutritionEstimate {
    pub items: Vec<String>,
    pub total_calories: serde_json::Number,
    pub total_carbohydrate: serde_json::Number,
    pub total_sugars: serde_json::Number,
}

/// Normalized nutrition summary returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionResult {
    pub items: Vec<String>,
    pub count: serde_json::Number,
    pub carbonhydrate: serde_json::Number,
    pub sugars: serde_json::Number,
}

impl From<NutritionEstimate> for NutritionResult {
    fn from(estimate: NutritionEstimate) -> Self {
        Self {
            items: estimate.items,
            count: estimate.total_calories,
            carbonhydrate: estimate.total_carbohydrate,
            sugars: estimate.total_sugars,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetectFoodResponse {
    #[serde(flatten)]
    pub result: NutritionResult,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_uri() {
        let uri = DataUri::parse("data:image/png;base64,aGVsbG8=").unwrap();

        assert_eq!(uri.mime_type, "image/png");
        assert_eq!(uri.data, "aGVsbG8=");
        assert_eq!(uri.to_url(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_parse_data_uri_accepts_any_payload_shape() {
        let unpadded = DataUri::parse("data:image/jpeg;base64,/9j/4AAQSkZJRg").unwrap();
        assert_eq!(unpadded.data, "/9j/4AAQSkZJRg");

        assert!(DataUri::parse("data:image/png;base64,aGVsbG8").is_some());

        let empty = DataUri::parse("data:image/png;base64,").unwrap();
        assert_eq!(empty.data, "");
        assert_eq!(empty.to_url(), "data:image/png;base64,");
    }

    #[test]
    fn test_parse_data_uri_rejects_malformed_input() {
        assert!(DataUri::parse("not-an-image").is_none());
        assert!(DataUri::parse("data:image/png,aGVsbG8=").is_none());
        assert!(DataUri::parse("data:text/plain;base64,aGVsbG8=").is_none());
        assert!(DataUri::parse("data:image/;base64,aGVsbG8=").is_none());
        assert!(DataUri::parse("data:image/svg+xml;base64,aGVsbG8=").is_none());
        assert!(DataUri::parse("data:image/jpeg;base64,aGVs\nbG8=").is_none());
        assert!(DataUri::parse(" data:image/jpeg;base64,aGVsbG8=").is_none());
    }

    #[test]
    fn test_estimate_renames_fields() {
        let estimate: NutritionEstimate = serde_json::from_str(
            r#"{"items":["米饭","鸡蛋"],"total_calories":320,"total_carbohydrate":45.5,"total_sugars":2}"#,
        )
        .unwrap();

        let result = NutritionResult::from(estimate);
        let json = serde_json::to_string(&DetectFoodResponse {
            result,
            success: true,
        })
        .unwrap();

        assert_eq!(
            json,
            r#"{"items":["米饭","鸡蛋"],"count":320,"carbonhydrate":45.5,"sugars":2,"success":true}"#
        );
    }

    #[test]
    fn test_estimate_missing_field_fails() {
        let parsed = serde_json::from_str::<NutritionEstimate>(
            r#"{"items":["apple"],"total_calories":95}"#,
        );
        assert!(parsed.is_err());
    }
}
