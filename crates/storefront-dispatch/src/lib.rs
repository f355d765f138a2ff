//! Order dispatch: an ordered chain of delivery channels ending in a
//! `wa.me` deep link that cannot fail.

pub mod channel;
pub mod deep_link;
pub mod dispatcher;
pub mod error;
pub mod image_url;
pub mod relay;
pub mod share;

pub use channel::{Channel, Delivery, Outcome, PreparedOrder, TerminalChannel};
pub use deep_link::{DeepLinkChannel, LinkOpener};
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use image_url::resolve_image_url;
pub use relay::RelayChannel;
pub use share::{
    ShareCapability, ShareChannel, ShareError, ShareFile, SharePayload, ShareTarget,
    UnsupportedShare,
};
