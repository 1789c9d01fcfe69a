// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Why a generation request produced no usable text.
///
/// Every variant is masked by fallback text in
/// [`GeminiProvider`](crate::GeminiProvider); callers that need the cause
/// use [`GeminiClient::generate`](crate::GeminiClient::generate) directly.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to {endpoint} failed: {source}")]
    NetworkFailure {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {endpoint}: {body}")]
    UpstreamError {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("response from {endpoint} carried no text")]
    EmptyPayload { endpoint: String },
}

impl ProviderError {
    /// Short name of the variant, used as a log property.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NetworkFailure { .. } => "network_failure",
            ProviderError::UpstreamError { .. } => "upstream_error",
            ProviderError::EmptyPayload { .. } => "empty_payload",
        }
    }
}
