//! HTTP client for a Workers-AI-style text generation endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::suggester::{SlugSuggester, SuggestError};

/// How much of the content goes into the prompt.
const PROMPT_CONTENT_LIMIT: usize = 500;
const MAX_TOKENS: u32 = 15;
const TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerationResponse {
    response: Option<String>,
}

/// Suggester backed by an HTTP text-generation API.
///
/// Posts a short keyword-extraction prompt and expects a JSON body with a
/// `response` string. The request timeout is enforced client-side so a slow
/// model never holds up link creation beyond the configured bound.
pub struct HttpSlugSuggester {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
    model: String,
}

impl HttpSlugSuggester {
    pub fn new(
        api_url: String,
        api_token: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self, SuggestError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_url,
            api_token,
            model,
        })
    }

    fn build_prompt(content: &str, is_text: bool) -> String {
        let mut excerpt: String = content.chars().take(PROMPT_CONTENT_LIMIT).collect();
        if content.chars().count() > PROMPT_CONTENT_LIMIT {
            excerpt.push_str("...");
        }

        let subject = if is_text {
            format!("the following text:\n\n{excerpt}")
        } else {
            format!("the following URL: {excerpt}")
        };

        format!(
            "Generate a short, meaningful English keyword phrase to use as a \
             short-link suffix for {subject}\n\n\
             Requirements:\n\
             1. Reply with the keywords only, nothing else\n\
             2. Use lowercase words separated by hyphens\n\
             3. At most 5 words\n\
             4. Reflect the topic as accurately as possible"
        )
    }
}

#[async_trait]
impl SlugSuggester for HttpSlugSuggester {
    async fn suggest(&self, content: &str, is_text: bool) -> Result<String, SuggestError> {
        let body = GenerationRequest {
            model: &self.model,
            prompt: Self::build_prompt(content, is_text),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let mut request = self.client.post(&self.api_url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SuggestError::Timeout
            } else {
                SuggestError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Request(format!(
                "suggestion endpoint returned {status}"
            )));
        }

        let parsed: GenerationResponse = response
            .json()
            .await
            .map_err(|e| SuggestError::BadResponse(e.to_string()))?;

        match parsed.response {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(SuggestError::BadResponse("empty response field".into())),
        }
    }
}
