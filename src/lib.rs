//! SAME/EAS header decoding and alert-waveform synthesis.
//!
//! This crate implements both reciprocal operations on Specific Area
//! Message Encoding (SAME) data used by the US Emergency Alert System:
//! decoding a textual SAME header into a structured, human-readable alert
//! description ([`decoder`]), and encoding a SAME header -- together with
//! optional spoken narration -- into an AFSK-modulated PCM waveform
//! ([`synth`], [`assembler`]) conforming to the framing and timing
//! conventions of the EAS and of several hardware encoders (NWS, SAGE,
//! Trilithic).
//!
//! ```
//! use same_eas::{decoder, dictionary::Dictionary};
//!
//! let dictionary = Dictionary::default_dictionary();
//! let alert = decoder::decode_same_with_year(
//!     "ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-",
//!     dictionary,
//!     2024,
//! ).unwrap();
//! println!("{}", alert.formatted);
//! ```

pub mod assembler;
pub mod decoder;
pub mod dictionary;
pub mod error;
pub mod synth;
pub mod tracing_init;
pub mod transcode;
pub mod translate;
pub mod wav;

pub use assembler::{generate_eas_alert, AssembleOptions};
pub use decoder::{decode_same, DecodedAlert};
pub use dictionary::Dictionary;
pub use error::{Catalog, Result, SameError};
pub use synth::Mode;
pub use translate::{EventTranslator, FipsTranslator, LocationRecord, OriginatorTranslator};
