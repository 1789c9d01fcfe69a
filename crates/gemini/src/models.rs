// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body: a single user turn holding the prompt.
#[derive(Serialize, Debug, Clone)]
pub struct GenerateRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Response body. Only the fields needed for text extraction are modelled;
/// everything is optional because blocked or truncated responses omit them.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

/// A response part. Non-text parts (inline data, function calls) carry no
/// `text`, and a non-string `text` is treated the same way.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<Value>,
}

impl GenerateResponse {
    /// Text of the first candidate: parts joined with newlines, trimmed.
    /// Empty when the first candidate has no parts.
    pub fn text(&self) -> String {
        let Some(parts) = self
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.as_ref())
        else {
            return String::new();
        };

        parts
            .iter()
            .map(|part| part.text.as_ref().and_then(Value::as_str).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn test_text_joins_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"  # Ajmer"},{"text":"Body\n"}]}}]}"#,
        );
        assert_eq!(response.text(), "# Ajmer\nBody");
    }

    #[test]
    fn test_only_first_candidate_used() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"first"}]}},{"content":{"parts":[{"text":"second"}]}}]}"#,
        );
        assert_eq!(response.text(), "first");
    }

    #[test]
    fn test_non_string_parts_are_blank() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"a"},{"inlineData":{}},{"text":5},{"text":"b"}]}}]}"#,
        );
        assert_eq!(response.text(), "a\n\n\nb");
    }

    #[test]
    fn test_missing_pieces_are_empty() {
        assert_eq!(parse("{}").text(), "");
        assert_eq!(parse(r#"{"candidates":[]}"#).text(), "");
        assert_eq!(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).text(), "");
        assert_eq!(parse(r#"{"candidates":[{"content":{"role":"model"}}]}"#).text(), "");
        assert_eq!(parse(r#"{"candidates":[{"content":{"parts":[]}}]}"#).text(), "");
    }
}
