//! Terminal tier: open a prefilled `wa.me` conversation.

use async_trait::async_trait;
use storefront_core::WhatsAppContact;

use crate::channel::{Delivery, PreparedOrder, TerminalChannel};

/// Opens a URL in a new browsing context (tab, window or external app).
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}

pub struct DeepLinkChannel {
    contact: WhatsAppContact,
    opener: Box<dyn LinkOpener>,
}

impl DeepLinkChannel {
    #[must_use]
    pub fn new(contact: WhatsAppContact, opener: Box<dyn LinkOpener>) -> Self {
        Self { contact, opener }
    }

    /// The `wa.me` link for `order`, honoring its recipient override.
    #[must_use]
    pub fn link_for(&self, order: &PreparedOrder) -> String {
        self.contact
            .with_override(order.order.recipient_phone())
            .deep_link(&order.message)
    }
}

#[async_trait]
impl TerminalChannel for DeepLinkChannel {
    fn name(&self) -> &'static str {
        "deep_link"
    }

    async fn deliver(&self, order: &PreparedOrder) -> Delivery {
        let url = self.link_for(order);
        self.opener.open(&url);
        Delivery::DeepLinkOpened { url }
    }
}
