//! AFSK Waveform Synthesizer
//!
//! Generates the PCM float sample stream for marks, spaces, attention
//! tones, silences, and mode-specific framings, and assembles them into the
//! complete alert layout:
//!
//! ```text
//! silence(1s)
//! ‖ header-transmission(preamble ‖ zczc message, mode)
//! ‖ silence(mode == TRILITHIC ? 150ms : 500ms)
//! ‖ (attention-tone(mode) ‖ silence(1s))?
//! ‖ (narration ‖ silence(1s))?
//! ‖ eom(mode)
//! ‖ silence(1s)
//! ```
//!
//! Narration audio is threaded in by the caller (the [`crate::assembler`]
//! module) rather than loaded here -- the synthesizer has no knowledge of
//! files or external transcoders, only samples. See spec §4.4.

pub mod attention;
pub mod framing;
pub mod tone;

pub use framing::Mode;

/// Assembles the full alert waveform from its constituent segments.
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Synthesizer
    }

    /// Build the complete alert layout. `narration`, when `Some`, is
    /// inserted verbatim (already at 24 kHz mono float) followed by a
    /// 1-second silence; when `None` that segment is omitted entirely.
    pub fn assemble(
        &self,
        zczc_message: &str,
        mode: Mode,
        attention_tone_enabled: bool,
        narration: Option<&[f32]>,
    ) -> Vec<f32> {
        let mut out = Vec::new();

        out.extend_from_slice(&tone::silence(1000.0));
        out.extend_from_slice(&framing::transmit(zczc_message.as_bytes(), mode));
        out.extend_from_slice(&tone::silence(mode.post_header_silence_ms()));

        if attention_tone_enabled {
            out.extend_from_slice(&attention::attention_tone(mode));
            out.extend_from_slice(&tone::silence(1000.0));
        }

        if let Some(samples) = narration {
            out.extend_from_slice(samples);
            out.extend_from_slice(&tone::silence(1000.0));
        }

        out.extend_from_slice(&framing::transmit(framing::EOM_MESSAGE, mode));
        out.extend_from_slice(&tone::silence(1000.0));

        out
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_starts_with_one_second_silence() {
        let synth = Synthesizer::new();
        let wave = synth.assemble("ZCZC-TEST", Mode::Default, false, None);
        assert!(wave.len() > 24000);
        assert!(wave[0..24000].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn first_payload_samples_are_lsb_first_0xab_bits() {
        let synth = Synthesizer::new();
        let wave = synth.assemble("ZCZC-TEST", Mode::Default, false, None);

        // After 1s lead-in silence, the header burst begins with the
        // 16-byte 0xAB preamble: bit pattern 1,1,0,1,0,1,0,1 repeated
        // (0xAB = 0b1010_1011, LSB-first: 1,1,0,1,0,1,0,1).
        let spb = tone::samples_per_bit();
        let first_bit_segment = &wave[24000..24000 + spb];
        let second_bit_segment = &wave[24000 + spb..24000 + 2 * spb];

        // Bit 0 of 0xAB is 1 (mark), bit 1 is 1 (mark) too -- they should
        // be identical mark tones.
        assert_eq!(first_bit_segment, second_bit_segment);

        // Bit 2 of 0xAB is 0 (space) -- distinct from the mark tone.
        let third_bit_segment = &wave[24000 + 2 * spb..24000 + 3 * spb];
        assert_ne!(first_bit_segment, third_bit_segment);
    }

    #[test]
    fn enabling_attention_tone_adds_its_length_plus_one_second() {
        let synth = Synthesizer::new();
        let without = synth.assemble("ZCZC-TEST", Mode::Nws, false, None);
        let with = synth.assemble("ZCZC-TEST", Mode::Nws, true, None);

        let delta = with.len() - without.len();
        let expected = attention::attention_tone(Mode::Nws).len() + 24000;
        assert_eq!(delta, expected);
    }

    #[test]
    fn nws_attention_segment_is_nine_seconds_of_1050hz() {
        let synth = Synthesizer::new();
        let wave = synth.assemble("ZCZC-TEST", Mode::Nws, true, None);

        let header_len = framing::transmit(b"ZCZC-TEST", Mode::Nws).len();
        let post_header_silence = (Mode::Nws.post_header_silence_ms() / 1000.0 * 24000.0) as usize;
        let attention_start = 24000 + header_len + post_header_silence;

        let expected = tone::sine(1050.0, 9000.0, -4.0);
        assert_eq!(
            &wave[attention_start..attention_start + expected.len()],
            expected.as_slice()
        );
    }

    #[test]
    fn narration_is_inserted_verbatim_with_trailing_silence() {
        let synth = Synthesizer::new();
        let narration = vec![0.5f32; 1000];
        let without = synth.assemble("ZCZC-TEST", Mode::Default, false, None);
        let with = synth.assemble("ZCZC-TEST", Mode::Default, false, Some(&narration));

        assert_eq!(with.len(), without.len() + narration.len() + 24000);
    }

    #[test]
    fn total_length_equals_sum_of_segments() {
        let synth = Synthesizer::new();
        let mode = Mode::Sage;
        let narration = vec![0.1f32; 500];
        let wave = synth.assemble("ZCZC-TEST", mode, true, Some(&narration));

        let expected_len = 24000
            + framing::transmit(b"ZCZC-TEST", mode).len()
            + (mode.post_header_silence_ms() / 1000.0 * 24000.0) as usize
            + attention::attention_tone(mode).len()
            + 24000
            + narration.len()
            + 24000
            + framing::transmit(framing::EOM_MESSAGE, mode).len()
            + 24000;

        assert_eq!(wave.len(), expected_len);
    }
}
