// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Generated city content from the Gemini API, with static fallbacks.
//!
//! [`GeminiProvider`] issues one `generateContent` call per request and
//! substitutes fallback text on any failure, so callers always receive
//! something to render.

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod prompts;
pub mod provider;

pub use crate::client::GeminiClient;
pub use crate::config::{
    GeminiConfig, create_example_config, load_config, load_config_or_default, validate_config,
};
pub use crate::error::ProviderError;
pub use crate::provider::{ContentProvider, GeminiProvider, StaticProvider};

/// The four kinds of generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Article,
    Tutorial,
    Quiz,
    ShowsIntro,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Article,
        ContentKind::Tutorial,
        ContentKind::Quiz,
        ContentKind::ShowsIntro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Tutorial => "tutorial",
            ContentKind::Quiz => "quiz",
            ContentKind::ShowsIntro => "shows intro",
        }
    }

    pub fn prompt(&self, city: &str) -> String {
        prompts::prompt(*self, city)
    }

    pub fn fallback(&self, city: &str) -> String {
        fallback::fallback(*self, city)
    }
}
