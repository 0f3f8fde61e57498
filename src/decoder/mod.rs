//! SAME Header Decoder
//!
//! Parses a complete SAME header string, resolves it against the
//! [`Dictionary`] through the [`FipsTranslator`] and the originator/event
//! code translators, reconstructs the Julian-day time window, and renders a
//! formatted alert description. See spec §4.3.

pub mod time;

use chrono::Datelike;

use crate::dictionary::Dictionary;
use crate::error::{Result, SameError};
use crate::translate::fips::FipsTranslator;

/// A SAME header, parsed but not yet resolved against any dictionary.
/// See spec §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameHeader {
    pub originator: String,
    pub event: String,
    /// 6-digit location codes in the exact order they appeared in the
    /// header.
    pub locations: Vec<String>,
    /// `HHMM` purge offset, kept as the raw 4-digit string (hours 00-99,
    /// minutes not enforced -- spec §3).
    pub purge_offset: String,
    /// `DDDHHMM` issue time, kept as the raw 7-digit string.
    pub issue_time: String,
    pub sender: String,
}

/// One resolved location entry, joined into `DecodedAlert::locations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub start: String,
    pub end: String,
}

/// The fully resolved, presentation-ready decode of a SAME header. See
/// spec §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAlert {
    pub organization: String,
    pub event: String,
    /// Resolved location descriptions, joined with `"; "`, in input order.
    pub locations: String,
    pub timing: Timing,
    pub sender: String,
    pub formatted: String,
}

/// Decode a SAME header string against `dictionary`, using the process's
/// current local-clock year as the issue year (spec §3: "decoders do not
/// consult the header for year").
///
/// A trailing `-` is stripped before parsing. Validation proceeds in the
/// order given by spec §4.3 and fails fast on the first violation.
pub fn decode_same(header: &str, dictionary: &Dictionary) -> Result<DecodedAlert> {
    let year = chrono::Utc::now().year();
    decode_same_with_year(header, dictionary, year)
}

/// As [`decode_same`], but with the issue year supplied explicitly --
/// useful for tests and for callers who need reproducible output rather
/// than the wall-clock year.
pub fn decode_same_with_year(header: &str, dictionary: &Dictionary, year: i32) -> Result<DecodedAlert> {
    if header.is_empty() {
        return Err(SameError::NoData);
    }

    let trimmed = header.strip_suffix('-').unwrap_or(header);
    let segments: Vec<&str> = trimmed.split('-').collect();

    if segments.len() < 5 {
        return Err(SameError::InvalidSameHeader {
            detail: format!("expected at least 5 segments, got {}", segments.len()),
        });
    }

    if segments[0] != "ZCZC" {
        return Err(SameError::ZczcNotFound);
    }

    let org_code = segments[1];
    let organization = dictionary
        .org(&org_code.to_ascii_uppercase())
        .ok_or_else(|| SameError::OrgCodeInvalid {
            code: org_code.to_string(),
        })?
        .to_string();

    let event_code = segments[2];
    let event = dictionary
        .event(&event_code.to_ascii_uppercase())
        .ok_or_else(|| SameError::EventCodeInvalid {
            code: event_code.to_string(),
        })?
        .to_string();

    // Everything from segment[3] up to (and including) the one segment
    // that carries a `+` is the location list; that segment also yields
    // the purge offset. Segments after it, up to the issue-time segment,
    // don't occur in a well-formed header (the offset-bearing segment is
    // always the last location) but we scan rather than assume to give a
    // precise ExpireTimeInvalid when a `+` shows up early.
    let location_segments = &segments[3..];
    let plus_positions: Vec<usize> = location_segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.contains('+'))
        .map(|(i, _)| i)
        .collect();

    if plus_positions.len() != 1 {
        return Err(SameError::ExpireTimeInvalid {
            detail: "exactly one location segment must carry the purge offset".to_string(),
        });
    }
    let plus_idx = plus_positions[0];

    // segments before plus_idx are plain locations; plus_idx's segment
    // splits into the final location and the offset; the offset must be
    // the last location (i.e. plus_idx is the last entry of
    // location_segments that participates in the location list). The
    // segment immediately after plus_idx is the issue time.
    if plus_idx + 1 >= location_segments.len() {
        return Err(SameError::DateTimeInvalid {
            detail: "missing issue-time segment".to_string(),
        });
    }

    let (final_loc, offset) = location_segments[plus_idx]
        .split_once('+')
        .expect("plus_positions guarantees a '+' is present");

    if offset.len() != 4 {
        return Err(SameError::ExpireTimeInvalid {
            detail: format!("purge offset must be 4 digits, got {offset:?}"),
        });
    }
    if !offset.chars().all(|c| c.is_ascii_digit()) {
        return Err(SameError::ExpireTimeInvalid {
            detail: format!("purge offset must be all digits, got {offset:?}"),
        });
    }

    let mut raw_locations: Vec<&str> = location_segments[..plus_idx].to_vec();
    raw_locations.push(final_loc);

    let issue_time_segment = location_segments[plus_idx + 1];
    if issue_time_segment.len() != 7 {
        return Err(SameError::DateTimeInvalid {
            detail: format!("issue time must be 7 digits, got {issue_time_segment:?}"),
        });
    }
    if !issue_time_segment.chars().all(|c| c.is_ascii_digit()) {
        return Err(SameError::DateTimeInvalid {
            detail: format!("issue time must be all digits, got {issue_time_segment:?}"),
        });
    }

    let julian_day: u32 = issue_time_segment[0..3].parse().unwrap();
    let hour: u32 = issue_time_segment[3..5].parse().unwrap();
    let minute: u32 = issue_time_segment[5..7].parse().unwrap();

    if julian_day < 1 || julian_day > time::max_julian_day(year) {
        return Err(SameError::DateTimeInvalid {
            detail: format!("julian day {julian_day} out of range for {year}"),
        });
    }

    // The tail after the issue-time segment joins with '-' and discards
    // its first fragment before becoming the sender. Spec §9 flags this
    // as a source quirk to preserve rather than "fix": for a single
    // trailing fragment (the common case, e.g. "ERN/LB") there is nothing
    // left to discard after the time split, so the sender is simply that
    // fragment; for multiple fragments joined by '-', the first is lost.
    let tail_segments = &location_segments[plus_idx + 2..];
    let sender = tail_segments.join("-");

    // The decoder's `locations` field is county-level text ("Sedgwick, KS"),
    // not the subdivision-prefixed `formatted` field `FipsTranslator` returns
    // ("All Sedgwick, KS") -- spec §8 scenarios 1 and 2 both omit the "All"
    // prefix here, which is reserved for `translateFips`'s own `formatted`
    // output (§4.1, scenario 6).
    let fips = FipsTranslator::new(dictionary);
    let mut resolved_locations = Vec::with_capacity(raw_locations.len());
    for loc in &raw_locations {
        let record = fips.translate(loc)?;
        let location_text = if record.is_statewide {
            record.county
        } else {
            format!("{}, {}", record.county, record.region)
        };
        resolved_locations.push(location_text);
    }
    let locations = resolved_locations.join("; ");

    let offset_hours: i64 = offset[0..2].parse().unwrap();
    let offset_minutes: i64 = offset[2..4].parse().unwrap();

    let start = time::reconstruct(year, julian_day, hour, minute)?;
    let end = start + chrono::Duration::seconds((offset_hours * 60 + offset_minutes) * 60);

    let timing = Timing {
        start: time::format_timing(&start),
        end: time::format_timing(&end),
    };

    let formatted = format!(
        "{organization}a {event} for {locations}; beginning at {} and ending at {}. Message from {sender}",
        timing.start, timing.end
    );

    Ok(DecodedAlert {
        organization,
        event,
        locations,
        timing,
        sender,
        formatted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_json(
            r#"{
                "orgs": {
                    "CIV": "The Civil Authorities have issued ",
                    "WXR": "The National Weather Service has issued "
                },
                "orgs2": {},
                "events": {
                    "ADR": "Administrative Message",
                    "TSW": "Tsunami Warning",
                    "SQW": "Snow Squall Warning"
                },
                "same": {
                    "20173": "Sedgwick, KS",
                    "06081": "San Mateo, CA",
                    "06013": "Contra Costa, CA",
                    "06001": "Alameda, CA",
                    "06087": "Santa Cruz, CA",
                    "06085": "Santa Clara, CA",
                    "27133": "Ramsey, MN"
                },
                "subdiv": {}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn scenario_1_administrative_message() {
        let d = dict();
        let alert =
            decode_same_with_year("ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-", &d, 2024).unwrap();
        assert_eq!(alert.organization, "The Civil Authorities have issued ");
        assert_eq!(alert.event, "Administrative Message");
        assert_eq!(alert.locations, "Sedgwick, KS");
        assert_eq!(alert.timing.start, "5:07 PM on December 9");
        assert_eq!(alert.sender, "ERN/LB");
    }

    #[test]
    fn scenario_2_five_location_tsunami_warning() {
        let d = dict();
        let alert = decode_same_with_year(
            "ZCZC-WXR-TSW-006081-006013-006001-006087-006085+0100-3401900-WJON/BLU-",
            &d,
            2024,
        )
        .unwrap();
        assert_eq!(alert.event, "Tsunami Warning");
        assert_eq!(
            alert.locations,
            "San Mateo, CA; Contra Costa, CA; Alameda, CA; Santa Cruz, CA; Santa Clara, CA"
        );
        assert_eq!(alert.sender, "WJON/BLU");
    }

    #[test]
    fn scenario_3_missing_zczc() {
        let d = dict();
        let err = decode_same_with_year("-WXR-SQW-027133+0100-3441441-ERN/CRTV-", &d, 2024)
            .unwrap_err();
        assert_eq!(err, SameError::ZczcNotFound);
    }

    #[test]
    fn scenario_4_offset_not_four_digits() {
        let d = dict();
        let err = decode_same_with_year("ZCZC-WXR-SQW-027133+010-3441441-ERN/CRTV-", &d, 2024)
            .unwrap_err();
        assert!(matches!(err, SameError::ExpireTimeInvalid { .. }));
    }

    #[test]
    fn scenario_5_unknown_event_code() {
        let d = dict();
        let err = decode_same_with_year("ZCZC-WXR-AAA-027133+0100-3441441-ERN/CRTV-", &d, 2024)
            .unwrap_err();
        assert_eq!(
            err,
            SameError::EventCodeInvalid {
                code: "AAA".to_string()
            }
        );
    }

    #[test]
    fn fewer_than_five_segments_is_invalid_header() {
        let d = dict();
        let err = decode_same_with_year("ZCZC-CIV-ADR", &d, 2024).unwrap_err();
        assert!(matches!(err, SameError::InvalidSameHeader { .. }));
    }

    #[test]
    fn empty_header_is_no_data() {
        let d = dict();
        assert_eq!(decode_same_with_year("", &d, 2024), Err(SameError::NoData));
    }

    #[test]
    fn locations_preserve_input_order() {
        let d = dict();
        let alert = decode_same_with_year(
            "ZCZC-WXR-TSW-006085-006001+0100-3401900-WJON/BLU-",
            &d,
            2024,
        )
        .unwrap();
        assert_eq!(alert.locations, "Santa Clara, CA; Alameda, CA");
    }

    #[test]
    fn formatted_matches_round_trip_fields() {
        let d = dict();
        let alert =
            decode_same_with_year("ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-", &d, 2024).unwrap();
        let expected = format!(
            "{}a {} for {}; beginning at {} and ending at {}. Message from {}",
            alert.organization, alert.event, alert.locations, alert.timing.start, alert.timing.end, alert.sender
        );
        assert_eq!(alert.formatted, expected);
    }
}
