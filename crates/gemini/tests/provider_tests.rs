// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use gemini::{
    ContentKind, ContentProvider, GeminiClient, GeminiConfig, GeminiProvider, ProviderError,
    StaticProvider,
};
use heritage::quiz::{QuizState, load_quiz};
use std::time::Duration;

use mock_server::{Behavior, MockGeminiServer, unused_base_url};

fn test_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        ..GeminiConfig::default()
    }
}

/// Generated text comes back joined and trimmed
#[tokio::test]
async fn test_generated_text_is_returned() -> Result<()> {
    let mut mock_server = MockGeminiServer::new(Behavior::Parts(vec![
        serde_json::json!({ "text": "  # Jaipur Kathputli" }),
        serde_json::json!({ "text": "Strings and songs.\n" }),
    ]));
    let base_url = mock_server.start().await?;

    let provider = GeminiProvider::new(&test_config(&base_url))?;
    let article = provider.article("Jaipur").await;
    assert_eq!(article, "# Jaipur Kathputli\nStrings and songs.");

    mock_server.stop().await;
    Ok(())
}

/// The request carries the key, the model and a prompt naming the city
#[tokio::test]
async fn test_request_shape() -> Result<()> {
    let mut mock_server = MockGeminiServer::new(Behavior::text("ok"));
    let base_url = mock_server.start().await?;

    let provider = GeminiProvider::new(&test_config(&base_url))?;
    provider.tutorial("Udaipur").await;

    let requests = mock_server.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model_action, "gemini-2.0-flash:generateContent");
    assert_eq!(requests[0].key.as_deref(), Some("test-key"));
    assert!(requests[0].prompt().contains("style of Udaipur"));

    mock_server.stop().await;
    Ok(())
}

/// Each operation makes exactly one call
#[tokio::test]
async fn test_one_call_per_operation() -> Result<()> {
    let mut mock_server = MockGeminiServer::new(Behavior::Raw(503, "busy".to_string()));
    let base_url = mock_server.start().await?;

    let provider = GeminiProvider::new(&test_config(&base_url))?;
    provider.article("Kota").await;
    provider.tutorial("Kota").await;
    provider.quiz("Kota").await;
    provider.shows_intro("Kota").await;

    assert_eq!(mock_server.requests().await.len(), 4);

    mock_server.stop().await;
    Ok(())
}

/// A non-success status is an upstream error and falls back
#[tokio::test]
async fn test_upstream_error_uses_fallback() -> Result<()> {
    let mut mock_server = MockGeminiServer::new(Behavior::Raw(
        500,
        r#"{"error":{"message":"internal"}}"#.to_string(),
    ));
    let base_url = mock_server.start().await?;

    let config = test_config(&base_url);
    let client = GeminiClient::new(&config)?;
    match client.generate("prompt").await {
        Err(ProviderError::UpstreamError { status, body, .. }) => {
            assert_eq!(status, 500);
            assert!(body.contains("internal"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }

    let provider = GeminiProvider::new(&config)?;
    let article = provider.article("Bikaner").await;
    assert_eq!(article, ContentKind::Article.fallback("Bikaner"));

    mock_server.stop().await;
    Ok(())
}

/// A 2xx response without text is an empty payload
#[tokio::test]
async fn test_empty_payload_uses_fallback() -> Result<()> {
    for body in ["{}", r#"{"candidates":[]}"#, "not json at all"] {
        let mut mock_server = MockGeminiServer::new(Behavior::Raw(200, body.to_string()));
        let base_url = mock_server.start().await?;

        let config = test_config(&base_url);
        let result = GeminiClient::new(&config)?.generate("prompt").await;
        assert!(
            matches!(result, Err(ProviderError::EmptyPayload { .. })),
            "{body}: {result:?}"
        );

        let provider = GeminiProvider::new(&config)?;
        assert_eq!(
            provider.tutorial("Ajmer").await,
            ContentKind::Tutorial.fallback("Ajmer")
        );

        mock_server.stop().await;
    }
    Ok(())
}

/// Whitespace-only text counts as empty
#[tokio::test]
async fn test_blank_text_is_empty_payload() -> Result<()> {
    let mut mock_server = MockGeminiServer::new(Behavior::text("  \n "));
    let base_url = mock_server.start().await?;

    let result = GeminiClient::new(&test_config(&base_url))?
        .generate("prompt")
        .await;
    assert!(matches!(result, Err(ProviderError::EmptyPayload { .. })));

    mock_server.stop().await;
    Ok(())
}

/// Nothing listening is a network failure
#[tokio::test]
async fn test_network_failure_uses_fallback() -> Result<()> {
    let config = test_config(&unused_base_url()?);

    let result = GeminiClient::new(&config)?.generate("prompt").await;
    match result {
        Err(e @ ProviderError::NetworkFailure { .. }) => {
            assert!(!e.to_string().contains("test-key"));
        }
        other => panic!("expected network failure, got {other:?}"),
    }

    let provider = GeminiProvider::new(&config)?;
    let intro = provider.shows_intro("Pushkar").await;
    assert!(intro.starts_with("# Kathputli Performances in Pushkar"));
    Ok(())
}

/// A response slower than the timeout is a network failure
#[tokio::test]
async fn test_timeout_is_network_failure() -> Result<()> {
    let mut mock_server = MockGeminiServer::new(Behavior::Slow(
        Duration::from_secs(3),
        "too late".to_string(),
    ));
    let base_url = mock_server.start().await?;

    let config = GeminiConfig {
        timeout_seconds: 1,
        ..test_config(&base_url)
    };
    let result = GeminiClient::new(&config)?.generate("prompt").await;
    assert!(matches!(result, Err(ProviderError::NetworkFailure { .. })));

    mock_server.stop().await;
    Ok(())
}

/// A generated quiz wrapped in a fenced block still loads
#[tokio::test]
async fn test_generated_quiz_loads() -> Result<()> {
    let payload = "```json\n{\"questions\":[{\"question\":\"Q?\",\"options\":[\"a\",\"b\",\"c\",\"d\"],\"correctAnswer\":3}]}\n```";
    let mut mock_server = MockGeminiServer::new(Behavior::text(payload));
    let base_url = mock_server.start().await?;

    let provider = GeminiProvider::new(&test_config(&base_url))?;
    match load_quiz(&provider.quiz("Jaisalmer").await) {
        QuizState::Ready(quiz) => assert_eq!(quiz.questions[0].correct_answer, 3),
        QuizState::Unavailable => panic!("quiz should load"),
    }

    mock_server.stop().await;
    Ok(())
}

/// The static provider answers every operation, and its quiz loads
#[tokio::test]
async fn test_static_provider() -> Result<()> {
    let provider = StaticProvider;
    assert!(provider.article("Jodhpur").await.contains("Jodhpur"));
    assert!(provider.tutorial("Jodhpur").await.starts_with("# How to Make"));
    assert!(!provider.shows_intro("Jodhpur").await.is_empty());

    match load_quiz(&provider.quiz("Jodhpur").await) {
        QuizState::Ready(quiz) => {
            assert_eq!(quiz.len(), 5);
            let correct: Vec<usize> = quiz.questions.iter().map(|q| q.correct_answer).collect();
            assert_eq!(correct, [0, 2, 2, 1, 1]);
        }
        QuizState::Unavailable => panic!("fallback quiz should load"),
    }
    Ok(())
}
