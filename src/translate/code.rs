//! Originator & Event Translators
//!
//! Both translators take a 3-character code and resolve it against a
//! dictionary table. They share one validation shape (spec §4.2): non-empty,
//! exactly 3 ASCII letters, uppercased before lookup. Only the table
//! consulted and the error variant returned on a dictionary miss differ, so
//! the shared shape lives in [`translate_code`] and each public translator is
//! a thin wrapper naming its own errors.

use crate::dictionary::Dictionary;
use crate::error::{Result, SameError};

/// Resolve `code` to an organization phrase via the originator translator's
/// table (`orgs2`, per the §9 open question distinguishing it from the
/// header decoder's `orgs` table).
pub struct OriginatorTranslator<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> OriginatorTranslator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn translate(&self, code: &str) -> Result<String> {
        translate_code(
            code,
            |c| self.dictionary.org2(c),
            |code| SameError::OriginatorInvalid {
                code: code.to_string(),
            },
        )
    }
}

/// Resolve `code` to an event phrase via the event dictionary.
pub struct EventTranslator<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> EventTranslator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn translate(&self, code: &str) -> Result<String> {
        translate_code(
            code,
            |c| self.dictionary.event(c),
            |code| SameError::EventInvalid {
                code: code.to_string(),
            },
        )
    }
}

/// Shared validation and lookup shape for the 3-letter code translators.
///
/// Validation order: non-empty (`NoData`); exactly 3 characters, all ASCII
/// letters (`InvalidCharacters` on a non-letter; the length check on entry
/// to this function folds length mismatches into the caller-supplied
/// `invalid` error, matching spec §4.2's "length mismatch" wording);
/// uppercase and look up (caller-supplied `invalid` error on a miss).
fn translate_code<'a>(
    code: &str,
    lookup: impl Fn(&str) -> Option<&'a str>,
    invalid: impl Fn(&str) -> SameError,
) -> Result<String> {
    if code.is_empty() {
        return Err(SameError::NoData);
    }

    if code.len() != 3 {
        return Err(invalid(code));
    }

    if !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(SameError::InvalidCharacters {
            detail: code.to_string(),
        });
    }

    let upper = code.to_ascii_uppercase();
    lookup(&upper).map(str::to_string).ok_or_else(|| invalid(&upper))
}
