use crate::models::{Product, format_price};

pub const DEFAULT_CONTACT_PHONE: &str = "16134025965";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub phone: String,
}

impl ContactConfig {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_PHONE)
    }
}

pub fn contact_message(product: &Product) -> String {
    format!(
        "Hi! I'm interested in the {} listed for ${}. Could you please share more details about it? Thank you!",
        product.name,
        format_price(product.price)
    )
}

/// WhatsApp deep link asking the seller about `product`.
pub fn contact_link(config: &ContactConfig, product: &Product) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config.phone,
        urlencoding::encode(&contact_message(product))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dress() -> Product {
        Product {
            id: "1".into(),
            name: "Test Dress".into(),
            price: 49.99,
            description: "desc".into(),
            images: vec![],
            available: true,
        }
    }

    #[test]
    fn message_mentions_name_and_price() {
        let message = contact_message(&dress());
        assert!(message.starts_with("Hi! I'm interested in the Test Dress listed for $49.99."));
    }

    #[test]
    fn link_targets_configured_number_with_encoded_text() {
        let link = contact_link(&ContactConfig::new("15550001111"), &dress());
        assert!(link.starts_with("https://wa.me/15550001111?text=Hi%21%20I%27m%20interested"));
        assert!(link.contains("Test%20Dress"));
        assert!(link.contains("%2449.99"));
        assert!(!link.contains(' '));
    }
}
