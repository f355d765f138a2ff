use std::net::SocketAddr;
use std::path::PathBuf;

/// Value used for `WHATSAPP_ACCESS_TOKEN` when the variable is unset.
pub const PLACEHOLDER_ACCESS_TOKEN: &str = "YOUR_ACCESS_TOKEN_HERE";
/// Value used for `WHATSAPP_PHONE_NUMBER_ID` when the variable is unset.
pub const PLACEHOLDER_PHONE_NUMBER_ID: &str = "YOUR_PHONE_NUMBER_ID_HERE";
/// Business number that receives orders unless a request overrides it.
pub const DEFAULT_RECIPIENT_PHONE: &str = "2348036007786";
pub const DEFAULT_API_VERSION: &str = "v18.0";
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// WhatsApp Cloud API credentials and addressing.
#[derive(Clone)]
pub struct WhatsAppSettings {
    pub access_token: String,
    pub phone_number_id: String,
    pub api_version: String,
    pub graph_base_url: String,
    /// Default recipient for relayed orders, also the business number used
    /// in `wa.me` deep links. Empty means "not configured".
    pub recipient_phone: String,
    pub qr_code: Option<String>,
}

impl WhatsAppSettings {
    /// Returns `true` while either credential still holds its placeholder value.
    #[must_use]
    pub fn uses_placeholder_credentials(&self) -> bool {
        self.access_token == PLACEHOLDER_ACCESS_TOKEN
            || self.phone_number_id == PLACEHOLDER_PHONE_NUMBER_ID
    }
}

impl std::fmt::Debug for WhatsAppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppSettings")
            .field("access_token", &"[redacted]")
            .field("phone_number_id", &self.phone_number_id)
            .field("api_version", &self.api_version)
            .field("graph_base_url", &self.graph_base_url)
            .field("recipient_phone", &self.recipient_phone)
            .field("qr_code", &self.qr_code)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub whatsapp: WhatsAppSettings,
    pub http_timeout_secs: u64,
    /// Relay endpoint the dispatcher posts orders to. `None` skips the relay tier.
    pub relay_url: Option<String>,
    /// Page URL product image paths are resolved against.
    pub site_url: String,
    pub portfolio_dir: PathBuf,
}
