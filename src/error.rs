/// Error types for the order workflow
use thiserror::Error;

/// Reasons an order attempt is refused.
///
/// The `Display` text of the validation variants is the message shown to the
/// customer, so it stays in the page's locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Unknown plan identifier (a caller defect, never shown to the customer)
    #[error("Unknown plan: {0}")]
    PlanNotFound(String),

    /// Name, email or contact number left blank
    #[error("Mohon lengkapi semua field yang wajib diisi (*)")]
    MissingRequiredField,

    #[error("Mohon masukkan alamat email yang valid")]
    InvalidEmailFormat,

    #[error("Mohon masukkan nomor WhatsApp yang valid")]
    InvalidPhoneFormat,

    /// Submit while no order dialog is open
    #[error("No plan is selected")]
    NoActivePlan,

    /// Unknown quick-order service line
    #[error("Unknown service: {0}")]
    UnknownService(String),
}

impl OrderError {
    /// Whether this is a validation rejection the customer can fix and resubmit.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OrderError::MissingRequiredField | OrderError::InvalidEmailFormat | OrderError::InvalidPhoneFormat
        )
    }
}

/// Errors raised while turning configuration into runtime rules
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CONTACT_PREFIXES must list at least one prefix")]
    NoContactPrefixes,

    #[error("Invalid contact digit range: {min}..={max}")]
    InvalidDigitRange { min: usize, max: usize },

    #[error("Invalid contact pattern: {0}")]
    Pattern(#[from] regex::Error),
}
