// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use gemini::{GeminiProvider, load_config_or_default};
use heritage::{capitalize_first, find_city};
use renderer::DisplayBlock;
use renderer::html::to_html;
use renderer::plain::to_plain_text;

use diagnostics::*;

/// How command output is printed
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal text (default)
    Text,
    /// HTML fragment
    Html,
    /// JSON document
    Json,
}

/// Build the content provider from the config file, defaults when absent
pub fn build_provider(config_path: &Path) -> Result<GeminiProvider> {
    let config = load_config_or_default(config_path).with_context(|| {
        format!("Failed to load configuration from {}", config_path.display())
    })?;
    GeminiProvider::new(&config)
}

/// City name as used in content requests.
///
/// Names outside the map are allowed, matching the open city routes of the
/// site, but noted in the log.
pub fn resolve_city(raw: &str) -> Result<String> {
    let city = capitalize_first(raw);
    if city.is_empty() {
        anyhow::bail!("city name cannot be empty");
    }
    if find_city(&city).is_none() {
        warn!("{city} is not one of the mapped cities", city: city);
    }
    Ok(city)
}

/// Format display blocks for output
pub fn format_blocks(blocks: &[DisplayBlock], format: OutputFormat) -> Result<String> {
    Ok(with_newline(match format {
        OutputFormat::Text => to_plain_text(blocks),
        OutputFormat::Html => to_html(blocks).into_string(),
        OutputFormat::Json => serde_json::to_string_pretty(blocks)
            .with_context(|| "Failed to serialize display blocks")?,
    }))
}

/// Terminate output with exactly the newline the handler expects
pub fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
