//! HTTP client for the WhatsApp Cloud API `messages` endpoint.
//!
//! Wraps `reqwest` with bearer-token auth, the versioned Graph API path and
//! typed error handling. Every send is exactly one request; callers decide
//! what a failure means for them.

use std::time::Duration;

use reqwest::{Client, Url};
use storefront_core::WhatsAppSettings;

use crate::error::WhatsAppError;
use crate::types::{ImageMedia, MessageContent, OutboundMessage, TextBody};

/// Client for the WhatsApp Cloud API.
///
/// Use [`WhatsAppClient::new`] for configured settings or
/// [`WhatsAppClient::with_base_url`] to point at a mock server in tests.
#[derive(Clone)]
pub struct WhatsAppClient {
    client: Client,
    access_token: String,
    messages_url: Url,
}

impl std::fmt::Debug for WhatsAppClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppClient")
            .field("access_token", &"[redacted]")
            .field("messages_url", &self.messages_url.as_str())
            .finish_non_exhaustive()
    }
}

impl WhatsAppClient {
    /// Creates a client from configured settings.
    ///
    /// # Errors
    ///
    /// Returns [`WhatsAppError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`WhatsAppError::InvalidBaseUrl`] if the Graph base URL is unusable.
    pub fn new(settings: &WhatsAppSettings, timeout_secs: u64) -> Result<Self, WhatsAppError> {
        Self::with_base_url(
            &settings.access_token,
            &settings.phone_number_id,
            &settings.api_version,
            timeout_secs,
            &settings.graph_base_url,
        )
    }

    /// Creates a client against an explicit Graph API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`WhatsAppError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`WhatsAppError::InvalidBaseUrl`] if `base_url` cannot carry a path.
    pub fn with_base_url(
        access_token: &str,
        phone_number_id: &str,
        api_version: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, WhatsAppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("storefront/0.1 (order-relay)")
            .build()?;

        let invalid = |reason: String| WhatsAppError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut messages_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        messages_url
            .path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend([api_version, phone_number_id, "messages"]);

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            messages_url,
        })
    }

    #[must_use]
    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }

    /// Sends an image message; the Cloud API downloads `link` itself.
    ///
    /// Returns the upstream response document on success.
    ///
    /// # Errors
    ///
    /// - [`WhatsAppError::Api`] on a non-2xx response.
    /// - [`WhatsAppError::Http`] on network failure.
    /// - [`WhatsAppError::Deserialize`] if a 2xx body is not JSON.
    pub async fn send_image(
        &self,
        to: &str,
        link: &str,
        caption: &str,
    ) -> Result<serde_json::Value, WhatsAppError> {
        let content = MessageContent::Image {
            image: ImageMedia { link, caption },
        };
        self.send(&OutboundMessage::new(to, content)).await
    }

    /// Sends a plain text message.
    ///
    /// # Errors
    ///
    /// Same as [`WhatsAppClient::send_image`].
    pub async fn send_text(&self, to: &str, body: &str) -> Result<serde_json::Value, WhatsAppError> {
        let content = MessageContent::Text {
            text: TextBody { body },
        };
        self.send(&OutboundMessage::new(to, content)).await
    }

    async fn send(&self, message: &OutboundMessage<'_>) -> Result<serde_json::Value, WhatsAppError> {
        let kind = message.content.kind();
        tracing::debug!(to = message.to, kind, "sending WhatsApp message");

        let response = self
            .client
            .post(self.messages_url.clone())
            .bearer_auth(&self.access_token)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body = Self::describe_error_body(&body);
            tracing::error!(
                status = status.as_u16(),
                kind,
                error = %body,
                "WhatsApp API rejected message"
            );
            return Err(WhatsAppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| WhatsAppError::Deserialize {
            context: format!("send {kind} message"),
            source: e,
        })
    }

    /// Compact JSON when the error body parses, otherwise the trimmed text.
    fn describe_error_body(body: &str) -> String {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value.to_string(),
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
