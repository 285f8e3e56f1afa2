use async_trait::async_trait;
use log::{error, info};
use reqwest::Client as HttpClient;

use super::models::{ChatMessage, ChatRequest, ChatResponse, DiseaseInfo};
use crate::config::LlmConfig;
use crate::error::ApiError;

/// Seam over the LLM so handlers can be exercised without a live endpoint.
#[async_trait]
pub trait DiseaseInfoProvider: Send + Sync {
    async fn fetch(&self, disease_name: &str) -> Result<DiseaseInfo, ApiError>;
}

pub struct DiseaseInfoService {
    http_client: HttpClient,
    config: LlmConfig,
}

impl DiseaseInfoService {
    pub fn new(http_client: HttpClient, config: LlmConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

/// Category labels arrive with underscore separators, e.g.
/// "Tomato___Early_blight".
pub fn normalize_disease_name(name: &str) -> String {
    name.replace("___", " ").replace('_', " ")
}

fn build_prompt(disease_name: &str) -> String {
    format!(
        "Provide the following information about the plant disease '{disease_name}':\n\
         1. Description: What is this disease and what causes it?\n\
         2. Symptoms: What visual symptoms appear on the plant?\n\
         3. Disease cycle: How does the disease progress?\n\
         4. Treatment options: What are effective treatments?\n\
         5. Prevention methods: How can farmers prevent this disease?\n\
         \n\
         Format the response as JSON with these sections as keys."
    )
}

#[async_trait]
impl DiseaseInfoProvider for DiseaseInfoService {
    async fn fetch(&self, disease_name: &str) -> Result<DiseaseInfo, ApiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::Configuration("Groq API key not configured".into()))?;

        let clean_name = normalize_disease_name(disease_name);
        info!("Fetching disease information for '{}'", clean_name);

        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(&clean_name),
            }],
            temperature: 0.3,
            max_tokens: 800,
        };

        let response = self
            .http_client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Groq API returned {}: {}", status, body);
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| ApiError::Upstream {
                status: status.as_u16(),
                body: "completion response contained no choices".into(),
            })?;

        Ok(DiseaseInfo::from_reply(content))
    }
}
