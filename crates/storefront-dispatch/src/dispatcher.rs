use storefront_core::{compose_message, Order};

use crate::channel::{Channel, Delivery, Outcome, PreparedOrder, TerminalChannel};
use crate::image_url::resolve_image_url;

/// Runs an order through its channels in order of preference.
///
/// Channels are tried one at a time; the first delivery wins and every
/// fallthrough is logged and skipped. The terminal channel runs only when
/// all others fell through, so every dispatch ends in exactly one
/// [`Delivery`].
pub struct Dispatcher {
    page_url: String,
    channels: Vec<Box<dyn Channel>>,
    terminal: Box<dyn TerminalChannel>,
}

impl Dispatcher {
    /// `page_url` is the page image locations are resolved against.
    #[must_use]
    pub fn new(page_url: impl Into<String>, terminal: Box<dyn TerminalChannel>) -> Self {
        Self {
            page_url: page_url.into(),
            channels: Vec::new(),
            terminal,
        }
    }

    /// Appends a channel after the ones already registered.
    #[must_use]
    pub fn with_channel(mut self, channel: Box<dyn Channel>) -> Self {
        self.channels.push(channel);
        self
    }

    /// Channel names in attempt order, terminal last.
    #[must_use]
    pub fn channel_names(&self) -> Vec<&'static str> {
        self.channels
            .iter()
            .map(|c| c.name())
            .chain(std::iter::once(self.terminal.name()))
            .collect()
    }

    #[must_use]
    pub fn prepare(&self, order: Order) -> PreparedOrder {
        let image_url = resolve_image_url(order.image_location(), &self.page_url);
        let message = compose_message(
            order.product_name(),
            order.product_price(),
            Some(&image_url),
        );
        PreparedOrder {
            order,
            image_url,
            message,
        }
    }

    pub async fn dispatch(&self, order: Order) -> Delivery {
        let prepared = self.prepare(order);

        for channel in &self.channels {
            match channel.attempt(&prepared).await {
                Outcome::Delivered(delivery) => {
                    tracing::info!(
                        channel = channel.name(),
                        product = prepared.order.product_name(),
                        "order delivered"
                    );
                    return delivery;
                }
                Outcome::Fallthrough(reason) => {
                    tracing::warn!(
                        channel = channel.name(),
                        product = prepared.order.product_name(),
                        reason = %reason,
                        "channel fell through; trying next"
                    );
                }
            }
        }

        let delivery = self.terminal.deliver(&prepared).await;
        tracing::info!(
            channel = self.terminal.name(),
            product = prepared.order.product_name(),
            "order delivered"
        );
        delivery
    }
}
