//! Partial card-identifier reconstruction engine.
//!
//! This crate holds the only non-trivial logic in the workspace:
//!
//! - **Checksum validation** ([`luhn`]) — the mod-10 weighted-doubling
//!   check over raw numeric strings.
//! - **Brand classification** ([`brand`]) — fixed prefix/length rules
//!   compiled into an ordered pattern table, plus the static issuer table
//!   and BIN extraction.
//! - **Reconstruction strategies** ([`reconstruct`]) — four pure
//!   string-to-string transformations producing partial-disclosure output
//!   (digits mixed with a mask sentinel), each with an explicit
//!   minimum-length contract.
//! - **Per-card reporting** ([`report`]) — the strip/checksum/classify
//!   pipeline yielding a [`cardmask_core::CardReport`].
//!
//! Everything is synchronous and allocation-local; there is no I/O, no
//! shared mutable state, and no runtime dependency. Transport, response
//! envelopes, and external BIN lookups are the caller's concern.

pub mod brand;
pub mod luhn;
pub mod reconstruct;
pub mod report;

pub use brand::BrandClassifier;
pub use luhn::luhn_valid;
pub use reconstruct::Reconstructor;
pub use report::{parse_card_record, strip_separators, CardChecker};
