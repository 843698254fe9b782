//! Core types for the cardmask workspace.
//!
//! This crate defines the shared vocabulary used by the reconstruction
//! engine: the card brand enumeration, issuer lookup types, per-card report
//! types, masking configuration, and the error enum. It contains no logic
//! beyond constructors, `Display` impls, and defaults — all processing lives
//! in `cardmask-engine`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Brand & issuer types
// ---------------------------------------------------------------------------

/// Card brand identified from fixed numeric prefix patterns.
///
/// The classifier tests its rules in a fixed priority order and returns the
/// first match; anything that matches no rule is `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    /// 13 or 16 digits, leading `4`.
    Visa,
    /// 16 digits, leading `51`–`55`.
    Mastercard,
    /// 15 digits, leading `34` or `37`.
    Amex,
    /// 16 digits, leading `6011` or `65`.
    Discover,
    /// No rule matched.
    #[default]
    Unknown,
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visa => write!(f, "visa"),
            Self::Mastercard => write!(f, "mastercard"),
            Self::Amex => write!(f, "amex"),
            Self::Discover => write!(f, "discover"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Country associated with an issuer table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// Country display name.
    pub name: String,
    /// Flag emoji for display surfaces.
    pub emoji: String,
}

/// Issuer information resolved from the static first-digit table.
///
/// This is illustrative static data only; live BIN database lookups belong
/// to an external collaborator, not this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerInfo {
    /// Issuing bank display name.
    pub bank: String,
    /// Issuer country.
    pub country: CountryInfo,
}

impl IssuerInfo {
    /// Build an entry from static table strings.
    pub fn new(bank: &str, country: &str, emoji: &str) -> Self {
        Self {
            bank: bank.to_string(),
            country: CountryInfo {
                name: country.to_string(),
                emoji: emoji.to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Record & report types
// ---------------------------------------------------------------------------

/// A parsed pipe-separated card record (`number|MM|YY|CVV`).
///
/// Only the number is mandatory; trailing fields may be absent. The number
/// field is stored digits-only (separators already stripped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Account number, digits only.
    pub number: String,
    /// Expiry month field, if present.
    pub exp_month: Option<String>,
    /// Expiry year field, if present.
    pub exp_year: Option<String>,
    /// Card verification value field, if present.
    pub cvv: Option<String>,
}

/// Summary produced by a full per-card check: checksum validity, brand
/// classification, and issuer lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardReport {
    /// Whether the number passes the Luhn checksum.
    pub valid: bool,
    /// Classified brand.
    pub brand: CardBrand,
    /// First six digits, when the number is long enough.
    pub bin: Option<String>,
    /// Issuer resolved from the static table.
    pub issuer: IssuerInfo,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Masking configuration for the reconstruction strategies.
///
/// Controls the sentinel character emitted for redacted positions. The
/// sentinel carries no numeric meaning; it is purely a redaction marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Character emitted at masked positions.
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

fn default_mask_char() -> char {
    'x'
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            mask_char: default_mask_char(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Core error types.
#[derive(thiserror::Error, Debug)]
pub enum CardmaskError {
    /// Input has fewer digits than the strategy's declared minimum.
    #[error("insufficient length: need at least {required} digits, got {actual}")]
    InsufficientLength {
        /// Minimum digit count the strategy requires.
        required: usize,
        /// Digit count actually supplied.
        actual: usize,
    },

    /// A classifier pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),
}

/// Convenience alias for `std::result::Result<T, CardmaskError>`.
pub type Result<T> = std::result::Result<T, CardmaskError>;

// ===========================================================================
// Tests
// ===========================================================================
