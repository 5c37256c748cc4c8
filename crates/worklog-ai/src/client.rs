// Copyright (c) 2026 - present The worklog contributors
// SPDX-License-Identifier: MIT

//! Summarization endpoint clients
//!
//! The [`SummaryClient`] trait is the single seam between worklog and
//! the external generative-AI service: one prompt in, one text body
//! out. Everything above it (prompt composition, response alignment,
//! placeholder fallback) is pure and lives in [`crate::summarize`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::AiError;

/// Timeout applied to the single outbound request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A text-completion collaborator
#[async_trait]
pub trait SummaryClient: Send + Sync {
    /// Send one prompt and return the raw text of the reply
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

/// Client for an OpenAI-style chat-completions endpoint
///
/// Issues one POST per batch with a bearer token; no retries.
pub struct HttpSummaryClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl HttpSummaryClient {
    /// Build a client for the given endpoint, key, and model name
    ///
    /// # Errors
    ///
    /// Returns `AiError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// The configured endpoint URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryClient for HttpSummaryClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        debug!(endpoint = %self.endpoint, "sending summarization request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Status {
                status: status.as_u16(),
            });
        }

        let value: Value = response.json().await?;
        value
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(AiError::MalformedResponse)
    }
}
