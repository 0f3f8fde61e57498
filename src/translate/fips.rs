//! FIPS Translator
//!
//! Resolves a single 6-digit SAME location code into a structured
//! [`LocationRecord`]: one subdivision digit followed by a 5-digit county
//! code, looked up against the [`Dictionary`].

use crate::dictionary::Dictionary;
use crate::error::{Result, SameError};

/// `{subdivision, county, region, formatted}`, as resolved from one 6-digit
/// SAME location code. See spec §4.1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRecord {
    pub subdivision: String,
    pub county: String,
    /// 2-letter state abbreviation, or the county name itself for a
    /// statewide marker code (where `region == county`).
    pub region: String,
    pub formatted: String,
    /// Whether the 5-digit county code ends in `"000"` (spec §4.1's
    /// `isStatewide`), i.e. `region == county` and `formatted` uses the
    /// `"{subdivision} of {county}"` phrasing instead of `"{subdivision}
    /// {county}, {region}"`.
    pub is_statewide: bool,
}

/// Resolves 6-digit FIPS/SAME location codes against a [`Dictionary`].
pub struct FipsTranslator<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> FipsTranslator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// Translate a 6-character location code.
    ///
    /// Validation order (spec §4.1):
    /// 1. non-empty (else [`SameError::NoData`])
    /// 2. exactly 6 characters, all digits (else `FipsInvalid` on length,
    ///    `InvalidCharacters` on a non-digit)
    /// 3. the trailing 5 digits resolve in the county dictionary (else
    ///    `FipsInvalid`)
    /// 4. the leading digit resolves in the subdivision dictionary, with
    ///    `"0"` defaulting to `"All"` (else `SubdivisionInvalid`)
    pub fn translate(&self, data: &str) -> Result<LocationRecord> {
        if data.is_empty() {
            return Err(SameError::NoData);
        }

        if data.len() != 6 {
            return Err(SameError::FipsInvalid {
                code: data.to_string(),
            });
        }

        if !data.chars().all(|c| c.is_ascii_digit()) {
            return Err(SameError::InvalidCharacters {
                detail: data.to_string(),
            });
        }

        let subdivision_digit = &data[0..1];
        let loc = &data[1..6];

        let county_raw = self
            .dictionary
            .county(loc)
            .ok_or_else(|| SameError::FipsInvalid {
                code: data.to_string(),
            })?;

        let subdivision = self
            .dictionary
            .subdivision(subdivision_digit)
            .ok_or_else(|| SameError::SubdivisionInvalid {
                digit: subdivision_digit.to_string(),
            })?
            .to_string();

        let (county, region) = split_county_state(county_raw);
        let is_statewide = loc.ends_with("000");

        let formatted = if is_statewide {
            format!("{subdivision} of {county}")
        } else {
            format!("{subdivision} {county}, {region}")
        };

        let region = if is_statewide {
            county.clone()
        } else {
            region
        };

        Ok(LocationRecord {
            subdivision,
            county,
            region,
            formatted,
            is_statewide,
        })
    }
}

/// Split a `"County, ST"` dictionary value into its two parts on the first
/// comma, trimming the leading space off the state abbreviation.
fn split_county_state(raw: &str) -> (String, String) {
    match raw.split_once(',') {
        Some((county, state)) => (county.trim().to_string(), state.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}
