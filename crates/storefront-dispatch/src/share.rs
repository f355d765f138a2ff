//! Second tier: hand the product image and message to a native share sheet.

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use reqwest::{header::CONTENT_TYPE, Client};

use crate::channel::{Channel, Delivery, Outcome, PreparedOrder};
use crate::error::DispatchError;

/// What the runtime's share facility supports. Probed once per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareCapability {
    Unsupported,
    TextOnly,
    WithFiles,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub files: Vec<ShareFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    Cancelled,
    Failed(String),
}

/// A native share facility.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    fn capability(&self) -> ShareCapability;

    fn can_share(&self, payload: &SharePayload) -> bool;

    async fn share(&self, payload: SharePayload) -> Result<(), ShareError>;
}

/// Share target for runtimes without a share sheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedShare;

#[async_trait]
impl ShareTarget for UnsupportedShare {
    fn capability(&self) -> ShareCapability {
        ShareCapability::Unsupported
    }

    fn can_share(&self, _payload: &SharePayload) -> bool {
        false
    }

    async fn share(&self, _payload: SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Failed("sharing is not supported".to_string()))
    }
}

pub struct ShareChannel {
    client: Client,
    target: Box<dyn ShareTarget>,
    capability: ShareCapability,
}

impl ShareChannel {
    #[must_use]
    pub fn new(client: Client, target: Box<dyn ShareTarget>) -> Self {
        let capability = target.capability();
        tracing::debug!(?capability, "detected native share capability");
        Self {
            client,
            target,
            capability,
        }
    }

    #[must_use]
    pub fn capability(&self) -> ShareCapability {
        self.capability
    }

    async fn fetch_image(&self, url: &str) -> Result<ShareFile, DispatchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .filter(|v| v.starts_with("image/"))
            .unwrap_or_else(|| mime_from_extension(url).to_string());
        let bytes = response.bytes().await?.to_vec();

        Ok(ShareFile {
            name: file_name_from_url(url),
            mime_type,
            bytes,
        })
    }

    async fn share(&self, order: &PreparedOrder) -> Result<(), DispatchError> {
        if self.capability != ShareCapability::WithFiles {
            return Err(DispatchError::ShareUnavailable(self.capability));
        }

        let file = self.fetch_image(&order.image_url).await?;
        let payload = SharePayload {
            title: order.order.product_name().to_string(),
            text: order.message.clone(),
            files: vec![file],
        };

        if !self.target.can_share(&payload) {
            return Err(DispatchError::CannotShare);
        }

        self.target.share(payload).await.map_err(|e| match e {
            ShareError::Cancelled => DispatchError::ShareCancelled,
            ShareError::Failed(reason) => DispatchError::ShareFailed(reason),
        })
    }
}

#[async_trait]
impl Channel for ShareChannel {
    fn name(&self) -> &'static str {
        "native_share"
    }

    async fn attempt(&self, order: &PreparedOrder) -> Outcome {
        match self.share(order).await {
            Ok(()) => Outcome::Delivered(Delivery::Shared),
            Err(e) => Outcome::Fallthrough(e),
        }
    }
}

/// Last path segment, decoded, without query or fragment.
fn file_name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/')
        .next()
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "product.jpg".to_string())
}

fn mime_from_extension(url: &str) -> &'static str {
    let name = file_name_from_url(url).to_ascii_lowercase();
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
