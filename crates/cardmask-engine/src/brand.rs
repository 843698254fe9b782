//! Brand classification over fixed numeric prefix patterns.
//!
//! The classifier compiles its rule table once at construction and tests the
//! rules in a fixed priority order, first match winning. The built-in rule
//! set is mutually exclusive, so order does not currently change outcomes,
//! but it is preserved so future rule additions behave predictably.
//!
//! The issuer lookup is a static first-digit table; live BIN database
//! lookups are an external concern and deliberately absent here.

use cardmask_core::{CardBrand, CardmaskError, IssuerInfo, Result};
use regex::Regex;

/// A single brand rule: the full-string pattern and the brand it yields.
struct BrandRule {
    /// Brand reported when the pattern matches.
    brand: CardBrand,
    /// Compiled full-string pattern (anchored at both ends).
    regex: Regex,
}

/// Compile an iterator of `(brand, pattern)` pairs into a `Vec<BrandRule>`.
fn compile_brand_rules(
    defs: impl IntoIterator<Item = (CardBrand, &'static str)>,
) -> Result<Vec<BrandRule>> {
    defs.into_iter()
        .map(|(brand, pattern)| {
            let regex = Regex::new(pattern).map_err(|e| {
                CardmaskError::Pattern(format!("failed to compile rule for '{}': {}", brand, e))
            })?;
            Ok(BrandRule { brand, regex })
        })
        .collect()
}

/// Classifier for card brands based on fixed prefix/length rules.
///
/// # Example
///
/// ```
/// use cardmask_core::CardBrand;
/// use cardmask_engine::brand::BrandClassifier;
///
/// let classifier = BrandClassifier::new().unwrap();
/// assert_eq!(classifier.classify("4539148803436467"), CardBrand::Visa);
/// ```
pub struct BrandClassifier {
    /// Ordered rule table; first match wins.
    rules: Vec<BrandRule>,
}

impl BrandClassifier {
    /// Create a classifier with the built-in rule table compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if any rule pattern fails to compile.
    pub fn new() -> Result<Self> {
        let rules = Self::build_rules()?;
        Ok(Self { rules })
    }

    /// Build the ordered brand rule table.
    fn build_rules() -> Result<Vec<BrandRule>> {
        compile_brand_rules([
            // 13 or 16 digits, leading 4
            (CardBrand::Visa, r"^4[0-9]{12}(?:[0-9]{3})?$"),
            // 16 digits, leading 51-55
            (CardBrand::Mastercard, r"^5[1-5][0-9]{14}$"),
            // 15 digits, leading 34 or 37
            (CardBrand::Amex, r"^3[47][0-9]{13}$"),
            // 16 digits, leading 6011 or 65
            (CardBrand::Discover, r"^6(?:011|5[0-9]{2})[0-9]{12}$"),
        ])
    }

    /// Classify a digits-only identifier against the rule table.
    ///
    /// Input is expected to be separator-free; a string containing
    /// non-digits matches no rule and yields [`CardBrand::Unknown`].
    pub fn classify(&self, digits: &str) -> CardBrand {
        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(digits))
            .map_or(CardBrand::Unknown, |rule| rule.brand)
    }
}

impl Default for BrandClassifier {
    fn default() -> Self {
        Self::new().expect("failed to create default BrandClassifier")
    }
}

/// Extract the 6-digit BIN from a digits-only identifier.
///
/// Returns `None` when fewer than six digits are supplied.
pub fn bin(digits: &str) -> Option<&str> {
    if digits.len() >= 6 && digits.bytes().take(6).all(|b| b.is_ascii_digit()) {
        Some(&digits[..6])
    } else {
        None
    }
}

/// Resolve issuer information from the static first-digit table.
///
/// Unrecognized (or absent) leading digits fall back to the unknown-issuer
/// entry rather than failing.
pub fn issuer_info(digits: &str) -> IssuerInfo {
    match digits.chars().next() {
        Some('4') => IssuerInfo::new("VISA Bank", "United States", "\u{1F1FA}\u{1F1F8}"),
        Some('5') => IssuerInfo::new("MasterCard Bank", "United Kingdom", "\u{1F1EC}\u{1F1E7}"),
        Some('3') => IssuerInfo::new("American Express", "Canada", "\u{1F1E8}\u{1F1E6}"),
        Some('6') => IssuerInfo::new("Discover Bank", "Australia", "\u{1F1E6}\u{1F1FA}"),
        _ => IssuerInfo::new("Unknown Bank", "Unknown", "\u{1F30D}"),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> BrandClassifier {
        BrandClassifier::new().unwrap()
    }

    // -- Classification ----------------------------------------------------

    #[test]
    fn test_visa_16_digits() {
        assert_eq!(classifier().classify("4539148803436467"), CardBrand::Visa);
    }

    #[test]
    fn test_visa_13_digits() {
        assert_eq!(classifier().classify("4222222222222"), CardBrand::Visa);
    }

    #[test]
    fn test_visa_14_digits_is_unknown() {
        // Only 13 or 16 digits match the Visa rule.
        assert_eq!(classifier().classify("42222222222223"), CardBrand::Unknown);
    }

    #[test]
    fn test_mastercard_prefix_range() {
        let c = classifier();
        assert_eq!(c.classify("5100000000000000"), CardBrand::Mastercard);
        assert_eq!(c.classify("5500000000000004"), CardBrand::Mastercard);
        assert_eq!(c.classify("5600000000000000"), CardBrand::Unknown);
    }

    #[test]
    fn test_amex_prefixes() {
        let c = classifier();
        assert_eq!(c.classify("340000000000000"), CardBrand::Amex);
        assert_eq!(c.classify("378282246310005"), CardBrand::Amex);
        assert_eq!(c.classify("350000000000000"), CardBrand::Unknown);
    }

    #[test]
    fn test_discover_prefixes() {
        let c = classifier();
        assert_eq!(c.classify("6011111111111117"), CardBrand::Discover);
        assert_eq!(c.classify("6511111111111119"), CardBrand::Discover);
        // 15-digit 6011 prefix misses the length requirement.
        assert_eq!(c.classify("601111111111111"), CardBrand::Unknown);
    }

    #[test]
    fn test_unmatched_is_unknown() {
        assert_eq!(classifier().classify("1234567890123456"), CardBrand::Unknown);
    }

    #[test]
    fn test_separators_do_not_match() {
        // Classification expects digits-only input; separators never match.
        assert_eq!(
            classifier().classify("4539-1488-0343-6467"),
            CardBrand::Unknown
        );
    }

    // -- BIN extraction ----------------------------------------------------

    #[test]
    fn test_bin_extraction() {
        assert_eq!(bin("4539148803436467"), Some("453914"));
    }

    #[test]
    fn test_bin_too_short() {
        assert_eq!(bin("45391"), None);
    }

    // -- Issuer table ------------------------------------------------------

    #[test]
    fn test_issuer_for_visa_prefix() {
        assert_eq!(issuer_info("4539148803436467").bank, "VISA Bank");
    }

    #[test]
    fn test_issuer_fallback() {
        let info = issuer_info("9999999999999999");
        assert_eq!(info.bank, "Unknown Bank");
        assert_eq!(info.country.name, "Unknown");
    }

    #[test]
    fn test_issuer_empty_input_falls_back() {
        assert_eq!(issuer_info("").bank, "Unknown Bank");
    }
}
