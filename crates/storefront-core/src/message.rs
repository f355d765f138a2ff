//! Order message formatting shared by the dispatcher and the relay.

const NAIRA: &str = "₦";
const NAIRA_ENTITIES: [&str; 3] = ["&#8358;", "&#x20A6;", "&#x20a6;"];

/// Returns `true` when `price` should appear in the message: non-blank and
/// not a "contact for pricing" placeholder.
#[must_use]
pub fn price_is_listed(price: Option<&str>) -> bool {
    price.is_some_and(|p| !p.trim().is_empty() && !p.to_lowercase().contains("contact"))
}

/// Normalizes a listed price to carry the naira glyph exactly once.
#[must_use]
pub fn format_price(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains(NAIRA) || NAIRA_ENTITIES.iter().any(|e| raw.contains(e)) {
        NAIRA_ENTITIES
            .iter()
            .fold(raw.to_string(), |acc, entity| acc.replace(entity, NAIRA))
    } else {
        format!("{NAIRA} {raw}")
    }
}

/// Composes the order message.
///
/// `image_url` adds the image line; the relay leaves it out because the image
/// travels as the message attachment.
#[must_use]
pub fn compose_message(product_name: &str, price: Option<&str>, image_url: Option<&str>) -> String {
    let mut message = format!(
        "Hello! I'm interested in ordering:\n\n📦 *Product Name:* {}\n",
        product_name.trim()
    );

    if let Some(price) = price.filter(|p| price_is_listed(Some(p))) {
        message.push_str(&format!("💰 *Price:* {}\n", format_price(price)));
    }

    if let Some(url) = image_url {
        message.push_str(&format!("🖼️ *Image:* {url}\n"));
    }

    message.push_str("\nPlease provide more details about this product.");
    message
}
