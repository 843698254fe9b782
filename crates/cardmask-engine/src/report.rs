//! Per-card check pipeline: strip separators, run the checksum, classify
//! the brand, and resolve issuer information into a single [`CardReport`].
//!
//! Callers hand this module raw request strings; everything downstream of
//! the report (response envelopes, batching, delays) belongs to the caller.

use cardmask_core::{CardRecord, CardReport, Result};

use crate::brand::{bin, issuer_info, BrandClassifier};
use crate::luhn::luhn_valid;

/// Strip every non-digit character from raw input.
///
/// # Examples
///
/// ```
/// use cardmask_engine::report::strip_separators;
///
/// assert_eq!(strip_separators("4539-1488 0343 6467"), "4539148803436467");
/// ```
pub fn strip_separators(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parse a pipe-separated card record (`number|MM|YY|CVV`).
///
/// Only the number field is required; missing trailing fields are `None`.
/// The number field is stripped to digits, the remaining fields are kept
/// as-is apart from surrounding whitespace.
pub fn parse_card_record(raw: &str) -> CardRecord {
    let mut parts = raw.split('|').map(str::trim);

    CardRecord {
        number: strip_separators(parts.next().unwrap_or_default()),
        exp_month: parts.next().map(str::to_string),
        exp_year: parts.next().map(str::to_string),
        cvv: parts.next().map(str::to_string),
    }
}

/// Runs the full per-card check pipeline.
///
/// # Example
///
/// ```
/// use cardmask_core::CardBrand;
/// use cardmask_engine::report::CardChecker;
///
/// let checker = CardChecker::new().unwrap();
/// let report = checker.check("4539 1488 0343 6467|12|27|123");
/// assert!(report.valid);
/// assert_eq!(report.brand, CardBrand::Visa);
/// ```
pub struct CardChecker {
    classifier: BrandClassifier,
}

impl CardChecker {
    /// Create a checker with the brand rule table compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if the brand rule table fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            classifier: BrandClassifier::new()?,
        })
    }

    /// Check a raw card record and summarize the outcome.
    pub fn check(&self, raw: &str) -> CardReport {
        let record = parse_card_record(raw);
        let digits = &record.number;

        let report = CardReport {
            valid: luhn_valid(digits),
            brand: self.classifier.classify(digits),
            bin: bin(digits).map(str::to_string),
            issuer: issuer_info(digits),
        };
        tracing::debug!(valid = report.valid, brand = %report.brand, "card check complete");
        report
    }
}

impl Default for CardChecker {
    fn default() -> Self {
        Self::new().expect("failed to create default CardChecker")
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cardmask_core::CardBrand;

    // -- Separator stripping -----------------------------------------------

    #[test]
    fn test_strip_spaces_and_hyphens() {
        assert_eq!(strip_separators("4539 1488-0343 6467"), "4539148803436467");
    }

    #[test]
    fn test_strip_leaves_digits_alone() {
        assert_eq!(strip_separators("4539148803436467"), "4539148803436467");
    }

    #[test]
    fn test_strip_all_non_digits() {
        assert_eq!(strip_separators("no digits here"), "");
    }

    // -- Record parsing ----------------------------------------------------

    #[test]
    fn test_parse_full_record() {
        let record = parse_card_record("4539148803436467|12|27|123");
        assert_eq!(record.number, "4539148803436467");
        assert_eq!(record.exp_month.as_deref(), Some("12"));
        assert_eq!(record.exp_year.as_deref(), Some("27"));
        assert_eq!(record.cvv.as_deref(), Some("123"));
    }

    #[test]
    fn test_parse_number_only() {
        let record = parse_card_record("4539148803436467");
        assert_eq!(record.number, "4539148803436467");
        assert_eq!(record.exp_month, None);
        assert_eq!(record.cvv, None);
    }

    #[test]
    fn test_parse_strips_number_separators() {
        let record = parse_card_record("4539 1488 0343 6467|12|27");
        assert_eq!(record.number, "4539148803436467");
        assert_eq!(record.exp_year.as_deref(), Some("27"));
    }

    // -- Full pipeline -----------------------------------------------------

    #[test]
    fn test_check_valid_visa() {
        let report = CardChecker::new().unwrap().check("4539148803436467");
        assert!(report.valid);
        assert_eq!(report.brand, CardBrand::Visa);
        assert_eq!(report.bin.as_deref(), Some("453914"));
        assert_eq!(report.issuer.bank, "VISA Bank");
    }

    #[test]
    fn test_check_invalid_checksum_still_classifies() {
        // Checksum failure and brand classification are independent.
        let report = CardChecker::new().unwrap().check("4539148803436466");
        assert!(!report.valid);
        assert_eq!(report.brand, CardBrand::Visa);
    }

    #[test]
    fn test_check_unknown_number() {
        let report = CardChecker::new().unwrap().check("1234");
        assert!(!report.valid);
        assert_eq!(report.brand, CardBrand::Unknown);
        assert_eq!(report.bin, None);
        assert_eq!(report.issuer.bank, "Unknown Bank");
    }
}
