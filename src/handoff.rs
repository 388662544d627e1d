//! Deep links into the external messaging service.

use crate::config::{sanitize_base_url, sanitize_recipient};
use crate::utils::build_query_string;

/// Where composed messages are sent: `<base_url>/<recipient>`.
///
/// The recipient is fixed per deployment and never taken from customer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffTarget {
    base_url: String,
    recipient: String,
}

impl HandoffTarget {
    pub fn new(base_url: &str, recipient: &str) -> Self {
        Self {
            base_url: sanitize_base_url(base_url),
            recipient: sanitize_recipient(recipient),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Link that opens a chat with `message` pre-filled.
    ///
    /// ```
    /// use ptero::handoff::HandoffTarget;
    ///
    /// let target = HandoffTarget::new("https://wa.me/", "62 821");
    /// assert_eq!(target.link("Hi there!"), "https://wa.me/62821?text=Hi%20there%21");
    /// ```
    pub fn link(&self, message: &str) -> String {
        let query = build_query_string(&[("text", message)]);
        format!("{}/{}?{}", self.base_url, self.recipient, query)
    }
}

/// A message handed to the messaging service, with the link used to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub url: String,
    pub message: String,
}

impl Handoff {
    pub fn new(target: &HandoffTarget, message: String) -> Self {
        Self {
            url: target.link(&message),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_percent_encodes_message() {
        let target = HandoffTarget::new("https://wa.me", "6282133886418");
        let url = target.link("*PESANAN*\n\n✓ 1GB RAM");
        assert_eq!(
            url,
            "https://wa.me/6282133886418?text=%2APESANAN%2A%0A%0A%E2%9C%93%201GB%20RAM"
        );
    }

    #[test]
    fn encoded_text_decodes_back_to_message() {
        let target = HandoffTarget::new("https://wa.me", "6282133886418");
        let message = "Nama: Budi & co\n100% CPU?";
        let url = target.link(message);
        let (_, text) = url.split_once("?text=").unwrap();
        assert_eq!(urlencoding::decode(text).unwrap(), message);
    }

    #[test]
    fn recipient_is_digits_only() {
        let target = HandoffTarget::new("https://wa.me", "+62 821-3388-6418");
        assert_eq!(target.recipient(), "6282133886418");
    }

    #[test]
    fn handoff_keeps_message_and_link_together() {
        let target = HandoffTarget::new("https://wa.me", "1");
        let handoff = Handoff::new(&target, "hi".into());
        assert_eq!(handoff.url, "https://wa.me/1?text=hi");
        assert_eq!(handoff.message, "hi");
    }
}
