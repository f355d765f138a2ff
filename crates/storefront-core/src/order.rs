use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order is missing a product name")]
    MissingProductName,

    #[error("order is missing an image location")]
    MissingImage,
}

/// A single product inquiry, built per click and discarded after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    product_name: String,
    product_price: Option<String>,
    image_location: String,
    recipient_phone: Option<String>,
}

impl Order {
    /// Builds a validated order. Name and image location must be non-blank;
    /// blank optional fields are stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] when a required field is blank.
    pub fn new(
        product_name: &str,
        product_price: Option<&str>,
        image_location: &str,
    ) -> Result<Self, OrderError> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(OrderError::MissingProductName);
        }
        let image_location = image_location.trim();
        if image_location.is_empty() {
            return Err(OrderError::MissingImage);
        }

        Ok(Self {
            product_name: product_name.to_string(),
            product_price: non_blank(product_price),
            image_location: image_location.to_string(),
            recipient_phone: None,
        })
    }

    /// Addresses this order to `phone` instead of the configured business number.
    #[must_use]
    pub fn with_recipient(mut self, phone: Option<&str>) -> Self {
        self.recipient_phone = non_blank(phone);
        self
    }

    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[must_use]
    pub fn product_price(&self) -> Option<&str> {
        self.product_price.as_deref()
    }

    #[must_use]
    pub fn image_location(&self) -> &str {
        &self.image_location
    }

    #[must_use]
    pub fn recipient_phone(&self) -> Option<&str> {
        self.recipient_phone.as_deref()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}
