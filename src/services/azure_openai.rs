use anyhow::Result;

use super::completion::{ChatMessage, ChatRequest, ChatResponse, CompletionService, ResponseFormat};

/// Chat-completion client for an Azure OpenAI deployment endpoint
pub struct AzureOpenAIService {
    endpoint: url::Url,
    api_key: String,
    client: reqwest::Client,
}

impl AzureOpenAIService {
    pub fn new(endpoint: url::Url, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl CompletionService for AzureOpenAIService {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        response_format: &ResponseFormat,
    ) -> Result<String> {
        let request = ChatRequest {
            messages,
            response_format,
        };

        log::info!("🤖 Sending request to Azure OpenAI ({} messages)", messages.len());
        log::debug!("📤 Request payload size: {} bytes", serde_json::to_vec(&request)?.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .header("api-key", self.api_key.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 Azure OpenAI response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::error!("❌ Azure OpenAI API error ({}): {}", status, error_text);
            anyhow::bail!("Completion API error ({}): {}", status, error_text);
        }

        let response_text = response.text().await?;
        log::debug!("📄 Raw completion response size: {} bytes", response_text.len());

        let chat_response: ChatResponse = serde_json::from_str(&response_text)?;
        chat_response.into_content()
    }
}
