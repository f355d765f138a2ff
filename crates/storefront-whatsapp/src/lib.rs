pub mod client;
pub mod error;
pub mod types;

pub use client::WhatsAppClient;
pub use error::WhatsAppError;
pub use types::{ImageMedia, MessageContent, OutboundMessage, TextBody};
