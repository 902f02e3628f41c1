use serde::Serialize;

use crate::modules::listing::domain::entities::Listing;
use crate::shared::utils::FieldParser;

pub const DEFAULT_CONTACT_EMAIL: &str = "info@example.com";
const INQUIRY_SUBJECT: &str = "Inquiry about vehicle";

/// Seller contact actions for a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    /// `tel:` link, absent without a phone number
    pub call: Option<String>,
    /// WhatsApp chat link, absent when the phone has no digits
    pub whatsapp: Option<String>,
    pub email: String,
}

impl ContactLinks {
    pub fn new(phone: Option<&str>, email: &str) -> Self {
        let phone = phone.map(str::trim).filter(|p| !p.is_empty());

        Self {
            call: phone.map(|p| format!("tel:{}", p.replace(' ', ""))),
            whatsapp: phone
                .and_then(FieldParser::digits_only)
                .map(|digits| format!("https://wa.me/{}", digits)),
            email: format!(
                "mailto:{}?subject={}",
                email,
                urlencoding::encode(INQUIRY_SUBJECT)
            ),
        }
    }

    pub fn for_listing(listing: &Listing) -> Self {
        Self::new(listing.phone.as_deref(), DEFAULT_CONTACT_EMAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::listing::domain::entities::ListingId;

    #[test]
    fn builds_all_links_from_phone() {
        let links = ContactLinks::new(Some("+971 50 123 4567"), "sales@dealer.ae");
        assert_eq!(links.call.as_deref(), Some("tel:+971501234567"));
        assert_eq!(links.whatsapp.as_deref(), Some("https://wa.me/971501234567"));
        assert_eq!(
            links.email,
            "mailto:sales@dealer.ae?subject=Inquiry%20about%20vehicle"
        );
    }

    #[test]
    fn missing_phone_leaves_only_email() {
        let listing = Listing::new(ListingId::new("1"));
        let links = ContactLinks::for_listing(&listing);
        assert!(links.call.is_none());
        assert!(links.whatsapp.is_none());
        assert!(links.email.starts_with("mailto:info@example.com"));
    }
}
