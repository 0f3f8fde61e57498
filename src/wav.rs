//! WAV File I/O
//!
//! Reads and writes 24 kHz mono 16-bit PCM WAV files via `hound`, the
//! external "WAV writer" collaborator named in spec §6. Float samples in
//! `[-1.0, 1.0]` convert to 16-bit signed PCM with a saturating clamp to
//! `[-32768, 32767]` (spec §3's `AudioBuffer` invariant), matching the
//! conversion rustyft8's own `wav::f32_to_i16` performs, rewritten against
//! `hound` instead of a hand-rolled RIFF header.

use std::path::Path;

use hound::{SampleFormat, WavSpec};

use crate::error::Result;

/// Sample rate every SAME/EAS waveform in this crate is synthesized at.
pub const SAMPLE_RATE: u32 = 24000;

fn spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Saturating float-to-i16 conversion: `round(sample * 32767)` clamped to
/// `[-32768, 32767]`.
pub fn f32_to_i16(sample: f32) -> i16 {
    (sample * 32767.0).round().clamp(-32768.0, 32767.0) as i16
}

/// Write `samples` to `path` as a 24 kHz mono 16-bit PCM WAV file.
pub fn write_wav(path: impl AsRef<Path>, samples: &[f32]) -> Result<()> {
    let mut writer = hound::WavWriter::create(path, spec())?;
    for &sample in samples {
        writer.write_sample(f32_to_i16(sample))?;
    }
    writer.finalize()?;
    Ok(())
}

/// Read a 16-bit PCM WAV file back into `[-1.0, 1.0]` float samples.
///
/// Used to load the transcoder's resampled narration output (spec §4.5
/// step 1). Assumes mono 16-bit PCM input, which is exactly what the
/// transcoder is invoked to produce.
pub fn read_wav(path: impl AsRef<Path>) -> Result<Vec<f32>> {
    let mut reader = hound::WavReader::open(path)?;
    let samples: std::result::Result<Vec<i16>, hound::Error> = reader.samples::<i16>().collect();
    let samples = samples?;
    Ok(samples.into_iter().map(|s| s as f32 / 32767.0).collect())
}
