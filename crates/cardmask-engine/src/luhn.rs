//! Mod-10 weighted checksum validation (the Luhn algorithm, ISO/IEC 7812).
//!
//! This is the one real checksum in the workspace. It is exposed standalone
//! and is also consulted by tests covering the derived reconstruction
//! strategy, whose fixed suffix override deliberately does *not* repair the
//! checksum.

/// Validate a numeric identifier using the Luhn algorithm.
///
/// Non-digit characters (spaces, hyphens, any separator) are stripped before
/// checking, so callers may pass raw formatted input. The check holds for
/// any length of one digit or more; an input with no digits at all returns
/// `false` rather than letting the vacuous zero sum pass.
///
/// # Examples
///
/// ```
/// use cardmask_engine::luhn::luhn_valid;
///
/// assert!(luhn_valid("4539 1488 0343 6467"));
/// assert!(!luhn_valid("4539 1488 0343 6466"));
/// ```
pub fn luhn_valid(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.is_empty() {
        return false;
    }

    luhn_check(&digits)
}

/// Perform the Luhn checksum on a slice of digits.
///
/// Starting from the rightmost digit, every second digit is doubled; doubled
/// values above 9 have 9 subtracted. The number is valid when the total sum
/// is a multiple of 10.
fn luhn_check(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_number() {
        assert!(luhn_valid("4539148803436467"));
    }

    #[test]
    fn test_altered_final_digit_fails() {
        assert!(!luhn_valid("4539148803436466"));
    }

    #[test]
    fn test_altered_middle_digit_fails() {
        // Changing an undoubled digit always shifts the residue.
        assert!(!luhn_valid("4539148813436467"));
    }

    #[test]
    fn test_valid_with_spaces_and_dashes() {
        assert!(luhn_valid("4539-1488 0343-6467"));
    }

    #[test]
    fn test_valid_visa_test_card() {
        assert!(luhn_valid("4111111111111111"));
    }

    #[test]
    fn test_invalid_visa_test_card() {
        assert!(!luhn_valid("4111111111111112"));
    }

    #[test]
    fn test_valid_amex_length() {
        // 15-digit numbers are checked the same way; no length precondition.
        assert!(luhn_valid("378282246310005"));
    }

    #[test]
    fn test_single_digit_zero_is_valid() {
        assert!(luhn_valid("0"));
    }

    #[test]
    fn test_no_digits_is_invalid() {
        assert!(!luhn_valid("---"));
        assert!(!luhn_valid(""));
    }
}
