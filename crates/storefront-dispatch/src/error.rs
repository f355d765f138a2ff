use thiserror::Error;

use crate::share::ShareCapability;

/// Why a channel passed an order on to the next one.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid relay URL '{url}': {reason}")]
    InvalidRelayUrl { url: String, reason: String },

    #[error("relay responded with HTTP {status}")]
    RelayStatus { status: u16 },

    #[error("relay reported failure: {0}")]
    RelayRejected(String),

    #[error("native share unavailable ({0:?})")]
    ShareUnavailable(ShareCapability),

    #[error("share target cannot share this payload")]
    CannotShare,

    #[error("share cancelled by user")]
    ShareCancelled,

    #[error("share failed: {0}")]
    ShareFailed(String),
}
