//! Partial-disclosure reconstruction strategies.
//!
//! Four pure strategies that take one or two digit strings and produce an
//! output mixing literal digits with a mask sentinel:
//!
//! 1. **Basic** — keep the first 10 digits, mask the last 6.
//! 2. **Similarity** — keep the first 10 digits of the primary input, and
//!    in the tail keep only digits shared with the secondary input.
//! 3. **Positional** — keep the first 6 digits, then mask fixed positions
//!    inside three consecutive subgroups of the remainder.
//! 4. **Derived** — rebuild a candidate tail arithmetically from the
//!    secondary input, keep agreeing positions, and force the final
//!    character to `1`.
//!
//! Every strategy filters its input to digit characters first, so separator
//! characters never count as matching digits. Inputs below a strategy's
//! declared minimum yield [`CardmaskError::InsufficientLength`], never an
//! out-of-bounds panic.

use cardmask_core::{CardmaskError, MaskingConfig, Result};

/// Number of leading digits kept verbatim by the basic and similarity
/// strategies.
const KEPT_PREFIX: usize = 10;

/// Fixed output width of the basic, similarity, and derived strategies.
const FULL_WIDTH: usize = 16;

/// Width of the head/tail halves used by the derived strategy.
const HALF_WIDTH: usize = 8;

/// Digits kept verbatim at the front by the positional strategy.
const POSITIONAL_GROUP: usize = 6;

/// Minimum digits required after the positional strategy's first group.
const POSITIONAL_REMAINDER: usize = 9;

/// Reconstruction engine holding the masking configuration.
///
/// All methods are pure and synchronous; the engine holds no mutable state
/// and is safe to share across callers.
///
/// # Example
///
/// ```
/// use cardmask_engine::reconstruct::Reconstructor;
///
/// let engine = Reconstructor::default();
/// let masked = engine.basic("4539148803436467").unwrap();
/// assert_eq!(masked, "4539148803xxxxxx");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reconstructor {
    config: MaskingConfig,
}

impl Reconstructor {
    /// Create an engine with the given masking configuration.
    pub fn new(config: MaskingConfig) -> Self {
        Self { config }
    }

    fn mask(&self) -> char {
        self.config.mask_char
    }

    /// Strategy 1 — basic mask.
    ///
    /// Keeps positions 0–9 verbatim and emits six mask characters for
    /// positions 10–15. Digits beyond position 9 are discarded unread, so
    /// the output is always 16 characters regardless of input length.
    ///
    /// # Errors
    ///
    /// Returns [`CardmaskError::InsufficientLength`] when fewer than 10
    /// digits are supplied.
    pub fn basic(&self, cc: &str) -> Result<String> {
        let digits = digit_chars(cc);
        require_digits(KEPT_PREFIX, digits.len())?;

        let mut out: String = digits[..KEPT_PREFIX].iter().collect();
        for _ in KEPT_PREFIX..FULL_WIDTH {
            out.push(self.mask());
        }
        Ok(out)
    }

    /// Strategy 2 — similarity mask.
    ///
    /// Keeps positions 0–9 of `cc1` verbatim; for positions 10–15 the digit
    /// is kept only where both inputs agree, otherwise the mask is emitted.
    /// A position missing from either input counts as a disagreement (and a
    /// missing prefix position is masked), so the output is always 16
    /// characters and the method is infallible.
    pub fn similarity(&self, cc1: &str, cc2: &str) -> String {
        let primary = digit_chars(cc1);
        let secondary = digit_chars(cc2);

        (0..FULL_WIDTH)
            .map(|i| {
                let kept = primary.get(i).copied();
                if i < KEPT_PREFIX {
                    kept.unwrap_or_else(|| self.mask())
                } else {
                    match (kept, secondary.get(i)) {
                        (Some(a), Some(&b)) if a == b => a,
                        _ => self.mask(),
                    }
                }
            })
            .collect()
    }

    /// Strategy 3 — positional-group mask.
    ///
    /// Keeps the first 6 digits verbatim, then splits the remainder into
    /// consecutive subgroups of 3, 4, and whatever is left. The 3-group
    /// becomes `[d, x, d]`, the 4-group `[d, x, x, d]`, and the final group
    /// `[d, x, d, tail...]` when it holds at least 3 characters (shorter
    /// final groups pass through unchanged). Output length always equals
    /// the digit count of the input.
    ///
    /// # Errors
    ///
    /// Returns [`CardmaskError::InsufficientLength`] when fewer than 9
    /// digits follow the first group.
    pub fn positional(&self, cc: &str) -> Result<String> {
        let digits = digit_chars(cc);
        require_digits(POSITIONAL_GROUP + POSITIONAL_REMAINDER, digits.len())?;

        let (kept, remainder) = digits.split_at(POSITIONAL_GROUP);
        let (three, rest) = remainder.split_at(3);
        let (four, tail) = rest.split_at(4);

        let mut out: String = kept.iter().collect();

        out.push(three[0]);
        out.push(self.mask());
        out.push(three[2]);

        out.push(four[0]);
        out.push(self.mask());
        out.push(self.mask());
        out.push(four[3]);

        if tail.len() >= 3 {
            out.push(tail[0]);
            out.push(self.mask());
            out.push(tail[2]);
            out.extend(&tail[3..]);
        } else {
            out.extend(tail);
        }

        Ok(out)
    }

    /// Strategy 4 — derived-arithmetic reconstruction.
    ///
    /// Splits `cc2` into an 8-digit head and tail, multiplies them
    /// position-by-position, and concatenates the decimal representations of
    /// the eight products, truncated to exactly 8 *characters* (multi-digit
    /// products may be cut mid-digit; the truncation counts characters, not
    /// products). The candidate is `cc1`'s 8-digit head plus that block;
    /// positions where the candidate agrees with `cc1` keep the digit, the
    /// rest are masked. The final character is then overwritten with a
    /// literal `1` unconditionally — a fixed override, not checksum repair;
    /// the result routinely fails [`crate::luhn::luhn_valid`].
    ///
    /// # Errors
    ///
    /// Returns [`CardmaskError::InsufficientLength`] when either input has
    /// fewer than 16 digits.
    pub fn derived(&self, cc1: &str, cc2: &str) -> Result<String> {
        let primary = digit_chars(cc1);
        let secondary = digit_chars(cc2);
        require_digits(FULL_WIDTH, primary.len())?;
        require_digits(FULL_WIDTH, secondary.len())?;

        let head: Vec<u32> = digit_values(&secondary[..HALF_WIDTH]);
        let tail: Vec<u32> = digit_values(&secondary[HALF_WIDTH..FULL_WIDTH]);

        let mut block = String::new();
        for i in 0..HALF_WIDTH {
            block.push_str(&(tail[i] * head[i]).to_string());
        }
        // Eight products yield at least eight characters; cut mid-digit if
        // a multi-digit product straddles the boundary.
        block.truncate(HALF_WIDTH);

        let candidate: Vec<char> = primary[..HALF_WIDTH]
            .iter()
            .copied()
            .chain(block.chars())
            .collect();

        let mut out: String = candidate
            .iter()
            .zip(&primary[..FULL_WIDTH])
            .map(|(&c, &p)| if c == p { p } else { self.mask() })
            .collect();

        // The last character is always the literal 1, regardless of checksum.
        out.pop();
        out.push('1');
        Ok(out)
    }
}

/// Collect the digit characters of an input, dropping everything else.
fn digit_chars(input: &str) -> Vec<char> {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of a digit-character slice.
fn digit_values(digits: &[char]) -> Vec<u32> {
    digits.iter().filter_map(|c| c.to_digit(10)).collect()
}

/// Reject inputs below a strategy's minimum digit count.
fn require_digits(required: usize, actual: usize) -> Result<()> {
    if actual < required {
        tracing::debug!(required, actual, "input below strategy minimum");
        return Err(CardmaskError::InsufficientLength { required, actual });
    }
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
