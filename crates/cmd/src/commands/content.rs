// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use gemini::{ContentKind, ContentProvider};
use renderer::render;

use crate::common::{OutputFormat, format_blocks};

use diagnostics::*;

/// Print the heritage article for a city
pub async fn article_command<F>(
    provider: &dyn ContentProvider,
    city: &str,
    format: OutputFormat,
    handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    rendered_content(provider, ContentKind::Article, city, format, handler).await
}

/// Print the puppet making tutorial for a city
pub async fn tutorial_command<F>(
    provider: &dyn ContentProvider,
    city: &str,
    format: OutputFormat,
    handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    rendered_content(provider, ContentKind::Tutorial, city, format, handler).await
}

async fn rendered_content<F>(
    provider: &dyn ContentProvider,
    kind: ContentKind,
    city: &str,
    format: OutputFormat,
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    let text = provider.fetch(kind, city).await;
    let blocks = render(&text);
    let count = blocks.len();
    let kind_name = kind.as_str();
    debug!(
        "Rendered {kind_name} for {city} into {count} blocks",
        kind_name: kind_name, city: city, count: count
    );

    handler(&format_blocks(&blocks, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemini::StaticProvider;

    #[tokio::test]
    async fn test_article_renders_fallback() {
        let mut output = String::new();
        article_command(&StaticProvider, "Ajmer", OutputFormat::Text, |s| {
            output.push_str(s)
        })
        .await
        .unwrap();
        assert!(output.contains("AJMER"));
    }

    #[tokio::test]
    async fn test_tutorial_as_json_blocks() {
        let mut output = String::new();
        tutorial_command(&StaticProvider, "Bikaner", OutputFormat::Json, |s| {
            output.push_str(s)
        })
        .await
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let blocks = json.as_array().unwrap();
        assert_eq!(blocks[0]["type"], "heading1");
        assert_eq!(blocks[0]["text"], "How to Make a Kathputli Puppet");
        assert!(blocks.iter().enumerate().all(|(i, b)| b["position"] == i));
    }
}
