//! Business contact addressing and `wa.me` deep links.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// QR code used when neither a phone number nor a QR code is configured.
pub const DEFAULT_QR_CODE: &str = "KZWYMGJISBQXL1";

const DEEP_LINK_BASE: &str = "https://wa.me";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where deep-link conversations are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhatsAppContact {
    /// Digits-only international number, no `+`.
    Phone(String),
    QrCode(String),
}

impl WhatsAppContact {
    /// Picks the contact from configured values. A phone number with at least
    /// one digit wins over a QR code; with neither, [`DEFAULT_QR_CODE`] is used.
    #[must_use]
    pub fn resolve(phone: Option<&str>, qr_code: Option<&str>) -> Self {
        if let Some(digits) = phone.and_then(normalize_phone) {
            return Self::Phone(digits);
        }
        match qr_code.map(str::trim).filter(|q| !q.is_empty()) {
            Some(code) => Self::QrCode(code.to_string()),
            None => Self::QrCode(DEFAULT_QR_CODE.to_string()),
        }
    }

    /// Same contact, but addressed to `phone` when it carries any digits.
    #[must_use]
    pub fn with_override(&self, phone: Option<&str>) -> Self {
        match phone.and_then(normalize_phone) {
            Some(digits) => Self::Phone(digits),
            None => self.clone(),
        }
    }

    /// Builds the `wa.me` link that opens a conversation prefilled with `message`.
    #[must_use]
    pub fn deep_link(&self, message: &str) -> String {
        let text = utf8_percent_encode(message, URI_COMPONENT);
        match self {
            Self::Phone(phone) => format!("{DEEP_LINK_BASE}/{phone}?text={text}"),
            Self::QrCode(code) => format!("{DEEP_LINK_BASE}/qr/{code}?text={text}"),
        }
    }
}

/// Reduces a phone number to its digits (`+234 (803) 600-7786` becomes
/// `2348036007786`). `None` when no digit is left.
#[must_use]
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}
