//! Integration tests for SAME header decoding
//!
//! Exercises the full public decode path (dictionary lookup, FIPS
//! translation, time reconstruction, formatting) against the bundled
//! default dictionary, end to end rather than against the unit fixtures
//! used inside `src/decoder/mod.rs`.

use same_eas::decoder::decode_same_with_year;
use same_eas::{dictionary::Dictionary, SameError};

#[test]
fn administrative_message_against_the_bundled_dictionary() {
    let dictionary = Dictionary::default_dictionary();
    let alert = decode_same_with_year(
        "ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-",
        dictionary,
        2024,
    )
    .expect("well-formed header should decode");

    assert_eq!(alert.event, "Administrative Message");
    assert!(alert.locations.contains("Sedgwick"));
    assert_eq!(alert.sender, "ERN/LB");
    assert!(alert.formatted.contains("Administrative Message"));
    assert!(alert.formatted.starts_with("The Civil Authorities have issued"));
}

#[test]
fn five_location_tsunami_warning_preserves_order_and_joins_with_semicolons() {
    let dictionary = Dictionary::default_dictionary();
    let alert = decode_same_with_year(
        "ZCZC-WXR-TSW-006081-006013-006001-006087-006085+0100-3401900-WJON/BLU-",
        dictionary,
        2024,
    )
    .expect("five-location header should decode");

    let names: Vec<&str> = alert.locations.split("; ").collect();
    assert_eq!(names.len(), 5);
    assert!(names[0].contains("San Mateo"));
    assert!(names[4].contains("Santa Clara"));
}

#[test]
fn unknown_event_code_is_rejected_without_touching_locations() {
    let dictionary = Dictionary::default_dictionary();
    let err = decode_same_with_year(
        "ZCZC-WXR-AAA-027133+0100-3441441-ERN/CRTV-",
        dictionary,
        2024,
    )
    .unwrap_err();

    assert_eq!(
        err,
        SameError::EventCodeInvalid {
            code: "AAA".to_string()
        }
    );
}

#[test]
fn missing_zczc_marker_is_rejected_before_any_dictionary_lookup() {
    let dictionary = Dictionary::default_dictionary();
    let err =
        decode_same_with_year("-WXR-SQW-027133+0100-3441441-ERN/CRTV-", dictionary, 2024)
            .unwrap_err();
    assert_eq!(err, SameError::ZczcNotFound);
}

#[test]
fn tornado_warning_resolves_a_single_county_subdivision() {
    let dictionary = Dictionary::default_dictionary();
    let alert = decode_same_with_year(
        "ZCZC-WXR-TOR-030013+0030-3441707-KGF/TV-",
        dictionary,
        2024,
    )
    .expect("single-location header should decode");
    assert!(alert.locations.contains("Cascade"));
    assert!(alert.locations.contains("MT"));
}

#[test]
fn out_of_range_julian_day_is_rejected() {
    let dictionary = Dictionary::default_dictionary();
    let err = decode_same_with_year(
        "ZCZC-CIV-ADR-020173+0100-3671707-ERN/LB-",
        dictionary,
        2023, // 2023 is not a leap year: day 367 is out of range
    )
    .unwrap_err();
    assert!(matches!(err, SameError::DateTimeInvalid { .. }));
}
