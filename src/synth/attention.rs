//! Attention tone synthesis.
//!
//! NWS mode uses a single 1050 Hz tone at -4 dBFS for 9 seconds. Every other
//! mode uses a two-tone 853/960 Hz mix at -10 dBFS for 8 seconds, averaged
//! sample-by-sample. See spec §4.4.

use super::framing::Mode;
use super::tone::{
    sine, DEFAULT_ATTENTION_DB, DEFAULT_ATTENTION_FREQ_1, DEFAULT_ATTENTION_FREQ_2,
    DEFAULT_ATTENTION_MS, NWS_ATTENTION_DB, NWS_ATTENTION_FREQ, NWS_ATTENTION_MS,
};

/// Synthesize the attention tone for `mode`.
pub fn attention_tone(mode: Mode) -> Vec<f32> {
    match mode {
        Mode::Nws => sine(NWS_ATTENTION_FREQ, NWS_ATTENTION_MS, NWS_ATTENTION_DB),
        _ => two_tone(),
    }
}

/// `out[i] := 0.5 * (t1[i] + t2[i])` for the 853 Hz and 960 Hz components.
fn two_tone() -> Vec<f32> {
    let t1 = sine(DEFAULT_ATTENTION_FREQ_1, DEFAULT_ATTENTION_MS, DEFAULT_ATTENTION_DB);
    let t2 = sine(DEFAULT_ATTENTION_FREQ_2, DEFAULT_ATTENTION_MS, DEFAULT_ATTENTION_DB);
    t1.iter().zip(t2.iter()).map(|(a, b)| 0.5 * (a + b)).collect()
}
