// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::config::{GeminiConfig, redacted_key};
use crate::error::ProviderError;
use crate::models::{GenerateRequest, GenerateResponse};
use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;

use diagnostics::*;

/// Upstream error bodies are cut to this many characters.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Async Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &redacted_key(&self.api_key))
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for the configured model and endpoint
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    /// `generateContent` URL, without the key
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one prompt and return the text of the first candidate.
    ///
    /// One request, no retry. A 2xx response whose body does not decode or
    /// carries no text is [`ProviderError::EmptyPayload`].
    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let endpoint = &self.endpoint;
        let prompt_chars = prompt.chars().count();
        debug!(
            "POST {endpoint} with {prompt_chars} prompt characters",
            endpoint: endpoint, prompt_chars: prompt_chars
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .query(&[("key", &self.api_key)])
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| self.network_failure(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::UpstreamError {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.network_failure(e))?;

        let text = match serde_json::from_str::<GenerateResponse>(&body) {
            Ok(decoded) => decoded.text(),
            Err(e) => {
                let error = e.to_string();
                debug!(
                    "undecodable response body from {endpoint}: {error}",
                    endpoint: endpoint, error: error
                );
                String::new()
            }
        };

        if text.is_empty() {
            return Err(ProviderError::EmptyPayload {
                endpoint: self.endpoint.clone(),
            });
        }

        let text_chars = text.chars().count();
        debug!(
            "received {text_chars} characters from {endpoint}",
            text_chars: text_chars, endpoint: endpoint
        );
        Ok(text)
    }

    // reqwest errors embed the request URL, which carries the key
    fn network_failure(&self, error: reqwest::Error) -> ProviderError {
        ProviderError::NetworkFailure {
            endpoint: self.endpoint.clone(),
            source: error.without_url(),
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text.to_string(),
    }
}
