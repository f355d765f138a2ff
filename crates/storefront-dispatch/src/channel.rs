use async_trait::async_trait;
use storefront_core::Order;

use crate::error::DispatchError;

/// An order with its image URL resolved and its message composed, shared by
/// every channel in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedOrder {
    pub order: Order,
    pub image_url: String,
    pub message: String,
}

/// Observable end state of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The relay accepted the order; `message` is its confirmation text.
    RelayConfirmed { message: String },
    /// The native share sheet was invoked with the product image.
    Shared,
    /// A `wa.me` link was handed to the opener.
    DeepLinkOpened { url: String },
}

#[derive(Debug)]
pub enum Outcome {
    Delivered(Delivery),
    Fallthrough(DispatchError),
}

/// One fallible tier of the chain. Exactly one attempt per call.
#[async_trait]
pub trait Channel: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, order: &PreparedOrder) -> Outcome;
}

/// The last tier. It has no failure path, so it returns a [`Delivery`]
/// instead of an [`Outcome`].
#[async_trait]
pub trait TerminalChannel: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(&self, order: &PreparedOrder) -> Delivery;
}
