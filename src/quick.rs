//! One-click orders for the sister services advertised on the page.
//!
//! These skip the order dialog: the chosen package goes straight into a
//! short message for the service's own recipient.

use std::fmt;

use crate::config::Settings;
use crate::error::OrderError;
use crate::handoff::{Handoff, HandoffTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLine {
    EditMedia,
    GraphicDesign,
}

impl ServiceLine {
    pub const ALL: [ServiceLine; 2] = [ServiceLine::EditMedia, ServiceLine::GraphicDesign];

    pub fn parse(raw: &str) -> Result<Self, OrderError> {
        match raw.trim().to_lowercase().as_str() {
            "edit-media" => Ok(ServiceLine::EditMedia),
            "graphic-design" => Ok(ServiceLine::GraphicDesign),
            other => Err(OrderError::UnknownService(other.to_string())),
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ServiceLine::EditMedia => "edit-media",
            ServiceLine::GraphicDesign => "graphic-design",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceLine::EditMedia => "Edit Foto/Video",
            ServiceLine::GraphicDesign => "Desain Grafis",
        }
    }

    /// Packages offered as one-click buttons.
    pub fn packages(&self) -> &'static [&'static str] {
        &["Basic", "Premium", "Pro"]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ServiceLine::EditMedia => "*PESANAN EDIT FOTO/VIDEO*",
            ServiceLine::GraphicDesign => "*PESANAN DESAIN GRAFIS*",
        }
    }

    pub fn target(&self, settings: &Settings) -> HandoffTarget {
        let recipient = match self {
            ServiceLine::EditMedia => &settings.edit_media_recipient,
            ServiceLine::GraphicDesign => &settings.graphic_design_recipient,
        };
        HandoffTarget::new(&settings.messaging_base_url, recipient)
    }
}

impl fmt::Display for ServiceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

pub fn compose_quick(line: ServiceLine, package: &str) -> Result<String, OrderError> {
    let package = package.trim();
    if package.is_empty() {
        return Err(OrderError::MissingRequiredField);
    }
    Ok(format!(
        "{}\n\n✓ Saya ingin memesan paket: *{}*\n\nMohon diproses, terima kasih!",
        line.title(),
        package
    ))
}

pub fn quick_handoff(line: ServiceLine, package: &str, settings: &Settings) -> Result<Handoff, OrderError> {
    let message = compose_quick(line, package)?;
    tracing::info!(service = %line, package = package.trim(), "Quick order handed off");
    Ok(Handoff::new(&line.target(settings), message))
}
