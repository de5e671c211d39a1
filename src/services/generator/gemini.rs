//! Google Gemini text-generation client
//!
//! Calls the REST `generateContent` endpoint directly:
//! POST {api_url}/v1beta/models/{model}:generateContent
use crate::{
    error::{AppError, AppResult},
    services::generator::TitleGenerator,
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Clone)]
pub struct GeminiGenerator {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model: model.trim_start_matches("models/").to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        )
    }
}

#[async_trait::async_trait]
impl TitleGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Gemini API returned status {}: {}",
                status, body
            )));
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply.into_text().ok_or_else(|| {
            AppError::Generation("Gemini response contained no text".to_string())
        })?;

        tracing::debug!(
            model = %self.model,
            reply_chars = text.len(),
            provider = "gemini",
            "Generation completed"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
