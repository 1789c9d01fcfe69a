// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Content providers: generated text with a static fallback.

use anyhow::Result;
use async_trait::async_trait;

use crate::client::GeminiClient;
use crate::config::GeminiConfig;
use crate::error::ProviderError;
use crate::{ContentKind, fallback, prompts};

use diagnostics::*;

/// Source of city content. Every operation resolves to usable, non-empty
/// text; failures are masked by fallback text.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch(&self, kind: ContentKind, city: &str) -> String;

    /// Blog-style history and culture article
    async fn article(&self, city: &str) -> String {
        self.fetch(ContentKind::Article, city).await
    }

    /// Step-by-step puppet making tutorial
    async fn tutorial(&self, city: &str) -> String {
        self.fetch(ContentKind::Tutorial, city).await
    }

    /// Quiz payload; JSON, possibly wrapped in prose
    async fn quiz(&self, city: &str) -> String {
        self.fetch(ContentKind::Quiz, city).await
    }

    /// Short introduction for the show listings
    async fn shows_intro(&self, city: &str) -> String {
        self.fetch(ContentKind::ShowsIntro, city).await
    }
}

/// Provider backed by the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    pub fn from_client(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Generate without masking failures.
    pub async fn generate(&self, kind: ContentKind, city: &str) -> Result<String, ProviderError> {
        self.client.generate(&prompts::prompt(kind, city)).await
    }
}

#[async_trait]
impl ContentProvider for GeminiProvider {
    async fn fetch(&self, kind: ContentKind, city: &str) -> String {
        let kind_name = kind.as_str();
        info!("Requesting {kind_name} for {city}", kind_name: kind_name, city: city);

        match self.generate(kind, city).await {
            Ok(text) => text,
            Err(e) => {
                let cause = e.kind();
                let error = e.to_string();
                warn!(
                    "Using fallback {kind_name} for {city} after {cause}: {error}",
                    kind_name: kind_name, city: city, cause: cause, error: error
                );
                fallback::fallback(kind, city)
            }
        }
    }
}

/// Provider that always answers with the fallback text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProvider;

#[async_trait]
impl ContentProvider for StaticProvider {
    async fn fetch(&self, kind: ContentKind, city: &str) -> String {
        fallback::fallback(kind, city)
    }
}
