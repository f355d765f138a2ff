//! Request bodies for the Cloud API `messages` endpoint.

use serde::Serialize;

/// Body of `POST /{version}/{phone_number_id}/messages`.
#[derive(Debug, Serialize)]
pub struct OutboundMessage<'a> {
    pub messaging_product: &'static str,
    pub to: &'a str,
    #[serde(flatten)]
    pub content: MessageContent<'a>,
}

impl<'a> OutboundMessage<'a> {
    #[must_use]
    pub fn new(to: &'a str, content: MessageContent<'a>) -> Self {
        Self {
            messaging_product: "whatsapp",
            to,
            content,
        }
    }
}

/// Serialized as `"type": "<variant>"` plus a same-named payload object.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent<'a> {
    Image { image: ImageMedia<'a> },
    Text { text: TextBody<'a> },
}

impl MessageContent<'_> {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Text { .. } => "text",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageMedia<'a> {
    /// Must be a publicly fetchable HTTPS URL; the Cloud API downloads it.
    pub link: &'a str,
    pub caption: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TextBody<'a> {
    pub body: &'a str,
}
