//! Error taxonomy for SAME/EAS decoding and synthesis.
//!
//! A single enum carries every failure kind the decoder, translators, and
//! assembler can produce, each with an optional `detail` describing the
//! offending input. The decoder fails fast on the first violation it finds
//! (see `decoder::decode_same`); it never accumulates multiple errors.

use std::collections::HashMap;
use std::io::Read;

use once_cell::sync::Lazy;
use snafu::Snafu;

/// Errors produced by the FIPS translator, code translators, the SAME header
/// decoder, and the alert assembler.
#[derive(Debug, Snafu, PartialEq, Eq, Clone)]
#[snafu(visibility(pub(crate)))]
pub enum SameError {
    /// Input was empty or otherwise not supplied.
    #[snafu(display("no data supplied"))]
    NoData,

    /// A SAME header had fewer than 5 dash-delimited segments.
    #[snafu(display("invalid SAME header: {detail}"))]
    InvalidSameHeader { detail: String },

    /// The header's first segment was not the literal `ZCZC`.
    #[snafu(display("ZCZC marker not found"))]
    ZczcNotFound,

    /// The 3-letter originator code did not resolve in the originator
    /// dictionary.
    #[snafu(display("invalid originator code: {code}"))]
    OrgCodeInvalid { code: String },

    /// The 3-letter event code did not resolve in the event dictionary.
    #[snafu(display("invalid event code: {code}"))]
    EventCodeInvalid { code: String },

    /// A 6-digit FIPS/SAME location code failed structural or dictionary
    /// validation.
    #[snafu(display("invalid FIPS/SAME location code: {code}"))]
    FipsInvalid { code: String },

    /// The 7-digit issue-time segment was malformed or named a Julian day
    /// out of range for the year.
    #[snafu(display("invalid date/time: {detail}"))]
    DateTimeInvalid { detail: String },

    /// The purge offset segment was missing, malformed, or not 4 digits.
    #[snafu(display("invalid expire/purge time: {detail}"))]
    ExpireTimeInvalid { detail: String },

    /// `origTranslator` input failed structural validation (wrong length).
    #[snafu(display("invalid originator code: {code}"))]
    OriginatorInvalid { code: String },

    /// `eventTranslator` input failed structural validation (wrong length).
    #[snafu(display("invalid event code: {code}"))]
    EventInvalid { code: String },

    /// The subdivision digit did not resolve in the subdivision dictionary.
    #[snafu(display("invalid subdivision digit: {digit}"))]
    SubdivisionInvalid { digit: String },

    /// Input contained characters outside the expected alphabet (digits for
    /// FIPS codes, letters for originator/event codes).
    #[snafu(display("invalid characters in input: {detail}"))]
    InvalidCharacters { detail: String },

    /// The assembler's narration `audioPath` did not exist on disk. The one
    /// fatal error `generateEASAlert` can raise (see spec §4.5, §7).
    #[snafu(display("audio file not found: {path}"))]
    AudioFileNotFound { path: String },

    /// Invoking the external transcoder failed. Callers of the public
    /// assembler API never see this variant directly -- the assembler logs
    /// it and proceeds with an empty narration buffer (spec §7) -- but it is
    /// part of the taxonomy because `transcode` is a public module.
    #[snafu(display("audio transcode failed: {detail}"))]
    Transcode { detail: String },

    /// Filesystem I/O failure (temp file creation, output file write).
    #[snafu(display("I/O error: {detail}"))]
    Io { detail: String },

    /// WAV encode/decode failure from the `hound` backend.
    #[snafu(display("WAV error: {detail}"))]
    Wav { detail: String },
}

impl From<std::io::Error> for SameError {
    fn from(e: std::io::Error) -> Self {
        SameError::Io {
            detail: e.to_string(),
        }
    }
}

impl From<hound::Error> for SameError {
    fn from(e: hound::Error) -> Self {
        SameError::Wav {
            detail: e.to_string(),
        }
    }
}

impl SameError {
    /// The key spec §6 uses to index the localized-message mapping for this
    /// error's kind (`nodata`, `fipsinvalid`, `audioFileNotFound`, ...).
    /// `OriginatorInvalid`/`EventInvalid` share their key with
    /// `OrgCodeInvalid`/`EventCodeInvalid` per spec §6's key list, which
    /// lists `originvalid`/`eventinvalid` as the structural-validation keys
    /// distinct from the dictionary-lookup keys `orgcodeinvalid`/`eventcodeinvalid`.
    pub fn kind_key(&self) -> &'static str {
        match self {
            SameError::NoData => "nodata",
            SameError::InvalidSameHeader { .. } => "invalidsameheader",
            SameError::ZczcNotFound => "zczcnotfound",
            SameError::OrgCodeInvalid { .. } => "orgcodeinvalid",
            SameError::EventCodeInvalid { .. } => "eventcodeinvalid",
            SameError::FipsInvalid { .. } => "fipsinvalid",
            SameError::DateTimeInvalid { .. } => "datetimeinvalid",
            SameError::ExpireTimeInvalid { .. } => "expiretimeinvalid",
            SameError::OriginatorInvalid { .. } => "originvalid",
            SameError::EventInvalid { .. } => "eventinvalid",
            SameError::SubdivisionInvalid { .. } => "subdivisioninvalid",
            SameError::InvalidCharacters { .. } => "invalidcharacters",
            SameError::AudioFileNotFound { .. } => "audioFileNotFound",
            SameError::Transcode { .. } => "transcode",
            SameError::Io { .. } => "io",
            SameError::Wav { .. } => "wav",
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SameError>;

/// Localized message strings (spec §6): a mapping from error kind key
/// (`nodata`, `fipsinvalid`, `audioFileNotFound`, ...) to human text,
/// loaded the same way [`crate::dictionary::Dictionary`] loads its code
/// tables. A bundled English default ships with the crate; callers with
/// their own localization can supply any JSON object of the same shape.
#[derive(Debug, Clone)]
pub struct Catalog(HashMap<String, String>);

const DEFAULT_CATALOG_JSON: &str = include_str!("../data/messages.json");

static DEFAULT_CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_json(DEFAULT_CATALOG_JSON).expect("bundled catalog is well-formed"));

impl Catalog {
    /// Parse a catalog artifact from a JSON object of `kind -> message`.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: HashMap<String, String> = serde_json::from_str(json).map_err(|e| SameError::Io {
            detail: format!("malformed message catalog JSON: {e}"),
        })?;
        Ok(Catalog(map))
    }

    /// Parse a catalog artifact from any `Read` source (e.g. a file).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json(&buf)
    }

    /// The catalog bundled with this crate.
    pub fn default_catalog() -> &'static Catalog {
        &DEFAULT_CATALOG
    }

    /// The localized text for an error kind key, if the catalog has one.
    pub fn message(&self, kind_key: &str) -> Option<&str> {
        self.0.get(kind_key).map(String::as_str)
    }

    /// The localized text for a given error's kind, falling back to the
    /// error's own `Display` text when the catalog has no entry.
    pub fn describe(&self, error: &SameError) -> String {
        self.message(error.kind_key())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string())
    }
}
