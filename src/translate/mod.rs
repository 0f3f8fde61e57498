//! Code Translators
//!
//! [`fips`] resolves 6-digit SAME location codes into structured
//! [`fips::LocationRecord`]s. [`code`] resolves 3-letter originator and
//! event codes into their dictionary phrases, sharing one validation shape.

pub mod code;
pub mod fips;

pub use code::{EventTranslator, OriginatorTranslator};
pub use fips::{FipsTranslator, LocationRecord};
