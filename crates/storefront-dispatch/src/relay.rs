//! First tier: POST the order to the notification relay.

use async_trait::async_trait;
use reqwest::{Client, Url};
use storefront_core::{normalize_phone, RelayRequest, RelayResponse, WhatsAppContact};

use crate::channel::{Channel, Delivery, Outcome, PreparedOrder};
use crate::error::DispatchError;

pub struct RelayChannel {
    client: Client,
    endpoint: Url,
    /// Business number sent when the order carries no override.
    default_recipient: Option<String>,
}

impl RelayChannel {
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidRelayUrl`] if `endpoint` is not an
    /// absolute URL.
    pub fn new(
        client: Client,
        endpoint: &str,
        contact: &WhatsAppContact,
    ) -> Result<Self, DispatchError> {
        let endpoint = Url::parse(endpoint).map_err(|e| DispatchError::InvalidRelayUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        let default_recipient = match contact {
            WhatsAppContact::Phone(phone) => Some(phone.clone()),
            WhatsAppContact::QrCode(_) => None,
        };
        Ok(Self {
            client,
            endpoint,
            default_recipient,
        })
    }

    fn request_body(&self, prepared: &PreparedOrder) -> RelayRequest {
        let order = &prepared.order;
        RelayRequest {
            product_name: Some(order.product_name().to_string()),
            product_price: order.product_price().map(ToOwned::to_owned),
            image_url: Some(prepared.image_url.clone()),
            recipient_phone: order
                .recipient_phone()
                .and_then(normalize_phone)
                .or_else(|| self.default_recipient.clone()),
        }
    }

    async fn post(&self, prepared: &PreparedOrder) -> Result<String, DispatchError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&self.request_body(prepared))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::RelayStatus {
                status: status.as_u16(),
            });
        }

        let body: RelayResponse = response.json().await?;
        if !body.success {
            return Err(DispatchError::RelayRejected(
                body.error.unwrap_or_else(|| "success flag was false".to_string()),
            ));
        }

        Ok(body
            .message
            .unwrap_or_else(|| "Order sent via WhatsApp".to_string()))
    }
}

#[async_trait]
impl Channel for RelayChannel {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn attempt(&self, order: &PreparedOrder) -> Outcome {
        match self.post(order).await {
            Ok(message) => Outcome::Delivered(Delivery::RelayConfirmed { message }),
            Err(e) => Outcome::Fallthrough(e),
        }
    }
}
