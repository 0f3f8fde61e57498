//! Code Dictionary
//!
//! Read-only tables mapping SAME codes to the phrases the decoder and
//! translators render: originator codes, event codes, county/location
//! codes, and subdivision modifiers. Dictionaries are process-wide
//! immutable state, injected at construction (`Dictionary::from_json`,
//! `Dictionary::from_reader`) rather than referenced through a singleton,
//! so the translators and decoder stay unit-testable against a small
//! fixture table. A bundled default is available via [`Dictionary::default_dictionary`]
//! for callers who don't need a custom artifact.

use std::collections::HashMap;
use std::io::Read;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{Result, SameError};

/// The bundled default dictionary artifact, embedded at compile time.
const DEFAULT_DICTIONARY_JSON: &str = include_str!("../../data/dictionaries.json");

static DEFAULT: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::from_json(DEFAULT_DICTIONARY_JSON).expect("bundled dictionary is well-formed")
});

/// The four code-to-phrase mappings a SAME/EAS implementation needs:
/// originator (`orgs`), the alternate originator table used by
/// [`crate::translate::OriginatorTranslator`] (`orgs2`), event (`events`),
/// county/location (`same`), and subdivision (`subdiv`).
///
/// `orgs` and `orgs2` are kept distinct, matching the source distinction
/// noted in spec §9: the header decoder resolves organizations through
/// `orgs`, while the standalone originator translator resolves through
/// `orgs2`. Callers supplying their own dictionary artifact should keep both
/// tables populated unless they specifically want the two call sites to
/// diverge.
#[derive(Debug, Clone, Deserialize)]
pub struct Dictionary {
    orgs: HashMap<String, String>,
    orgs2: HashMap<String, String>,
    events: HashMap<String, String>,
    same: HashMap<String, String>,
    subdiv: HashMap<String, String>,
}

impl Dictionary {
    /// Parse a dictionary artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SameError::Io {
            detail: format!("malformed dictionary JSON: {e}"),
        })
    }

    /// Parse a dictionary artifact from any `Read` source (e.g. a file).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json(&buf)
    }

    /// The dictionary bundled with this crate, covering the SAME event and
    /// originator codes and a representative set of county codes. Lazily
    /// parsed once and shared for the lifetime of the process.
    pub fn default_dictionary() -> &'static Dictionary {
        &DEFAULT
    }

    /// Look up an originator code in the header-decoder table (`orgs`).
    pub fn org(&self, code: &str) -> Option<&str> {
        self.orgs.get(code).map(String::as_str)
    }

    /// Look up an originator code in the standalone-translator table
    /// (`orgs2`).
    pub fn org2(&self, code: &str) -> Option<&str> {
        self.orgs2.get(code).map(String::as_str)
    }

    /// Look up an event code.
    pub fn event(&self, code: &str) -> Option<&str> {
        self.events.get(code).map(String::as_str)
    }

    /// Look up a 5-digit county code, returning the raw `"County, ST"` value.
    pub fn county(&self, code: &str) -> Option<&str> {
        self.same.get(code).map(String::as_str)
    }

    /// Look up a subdivision digit (`"0"`..`"9"`). `"0"` falls back to
    /// `"All"` when absent from the table, per spec §6.
    pub fn subdivision(&self, digit: &str) -> Option<&str> {
        match self.subdiv.get(digit) {
            Some(v) => Some(v.as_str()),
            None if digit == "0" => Some("All"),
            None => None,
        }
    }
}
