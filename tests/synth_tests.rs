//! Integration tests for AFSK waveform synthesis
//!
//! Exercises the public `synth` surface across all five hardware modes,
//! checking the layout invariants spec §4.4/§8 describe rather than the
//! byte-level framing already covered by `src/synth/framing.rs`'s unit tests.

use same_eas::synth::{Mode, Synthesizer};

const SAMPLE_RATE: usize = 24000;

#[test]
fn every_mode_produces_a_nonempty_waveform_bracketed_by_silence() {
    for mode in [
        Mode::Default,
        Mode::Nws,
        Mode::Sage,
        Mode::Trilithic,
        Mode::Digital,
    ] {
        let synth = Synthesizer::new();
        let wave = synth.assemble("ZCZC-WXR-TOR-020173+0030-3441707-KEAX/NWS-", mode, true, None);

        assert!(wave.len() > 2 * SAMPLE_RATE, "mode {mode:?} produced too short a waveform");
        assert!(wave[0..SAMPLE_RATE].iter().all(|&x| x == 0.0));
        assert!(wave[wave.len() - SAMPLE_RATE..].iter().all(|&x| x == 0.0));
    }
}

#[test]
fn digital_mode_is_shorter_than_classic_modes_for_the_same_message() {
    let message = "ZCZC-WXR-TOR-020173+0030-3441707-KEAX/NWS-";
    let synth = Synthesizer::new();
    let digital = synth.assemble(message, Mode::Digital, false, None);
    let default_mode = synth.assemble(message, Mode::Default, false, None);

    // DIGITAL folds two silences and a shorter repeated payload into its
    // three bursts, versus three full repetitions for the classic modes.
    assert!(digital.len() < default_mode.len());
}

#[test]
fn trilithic_has_a_shorter_post_header_gap_than_default() {
    let message = "ZCZC-WXR-TOR-020173+0030-3441707-KEAX/NWS-";
    let synth = Synthesizer::new();
    let trilithic = synth.assemble(message, Mode::Trilithic, false, None);
    let default_mode = synth.assemble(message, Mode::Default, false, None);

    // Same framing shape (no suffix byte) as DEFAULT, but 500ms - 150ms
    // less total length from the shorter post-header silence.
    let delta = default_mode.len() - trilithic.len();
    assert_eq!(delta, ((500.0 - 150.0) / 1000.0 * SAMPLE_RATE as f32) as usize);
}

#[test]
fn narration_audio_extends_the_waveform_by_its_own_length_plus_a_trailing_second() {
    let message = "ZCZC-WXR-TOR-020173+0030-3441707-KEAX/NWS-";
    let synth = Synthesizer::new();
    let narration = vec![0.25f32; 5 * SAMPLE_RATE];

    let without = synth.assemble(message, Mode::Sage, false, None);
    let with = synth.assemble(message, Mode::Sage, false, Some(&narration));

    assert_eq!(with.len(), without.len() + narration.len() + SAMPLE_RATE);
}
