pub mod app_config;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod message;
pub mod order;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, WhatsAppSettings};
pub use catalog::{is_portfolio_image, Gallery, GalleryPage, PortfolioItem, ITEMS_PER_LOAD};
pub use config::{load_app_config, load_app_config_from_env};
pub use contact::{normalize_phone, WhatsAppContact, DEFAULT_QR_CODE};
pub use message::{compose_message, format_price, price_is_listed};
pub use order::{Order, OrderError};
pub use types::{RelayRequest, RelayResponse};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
