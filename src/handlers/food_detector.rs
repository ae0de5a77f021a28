use anyhow::Result;
use std::sync::Arc;

use super::prompts::{FOOD_DETECTION_PROMPT, SYSTEM_PROMPT};
use crate::models::{DataUri, NutritionEstimate, NutritionResult};
use crate::services::completion::{
    ChatMessage, CompletionService, ContentPart, ImageUrl, ResponseFormat,
};

pub struct FoodDetector {
    completion: Arc<dyn CompletionService>,
}

impl FoodDetector {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }

    /// Estimate the foods and nutrition values in a `data:image/...;base64,...` image
    pub async fn detect_food_and_calories(&self, image: &str) -> Result<NutritionResult> {
        let image = DataUri::parse(image)
            .ok_or_else(|| anyhow::anyhow!("Invalid image data format."))?;

        log::debug!(
            "📸 Detecting food in {} image ({} bytes of base64)",
            image.mime_type,
            image.data.len()
        );

        let messages = build_messages(&image);

        self.request_estimate(&messages).await.map_err(|e| {
            log::error!("❌ Food detection failed: {:#}", e);
            anyhow::anyhow!("Failed to detect food and calories: {}", e)
        })
    }

    async fn request_estimate(&self, messages: &[ChatMessage]) -> Result<NutritionResult> {
        let content = self
            .completion
            .complete(messages, &ResponseFormat::json_object())
            .await?;

        let estimate: NutritionEstimate = serde_json::from_str(&content)?;
        log::info!(
            "✅ Detected {} item(s), {} Cal",
            estimate.items.len(),
            estimate.total_calories
        );

        Ok(estimate.into())
    }
}

fn build_messages(image: &DataUri) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(vec![
            ContentPart::Text {
                text: FOOD_DETECTION_PROMPT.to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl { url: image.to_url() },
            },
        ]),
    ]
}
