//! Alert Assembler
//!
//! The top-level orchestrator: resolves optional narration audio through
//! the external transcoder, drives the [`Synthesizer`] to build the full
//! alert layout, and hands the finished sample stream to the WAV/MP3
//! writer. See spec §4.5.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, SameError};
use crate::synth::{Mode, Synthesizer};
use crate::transcode::Transcoder;
use crate::wav;

/// Options accepted by [`generate_eas_alert`]. See spec §4.5's option
/// table; every field has the spec's stated default via [`Default`].
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    pub mode: Mode,
    pub attention_tone: bool,
    pub audio_path: Option<PathBuf>,
    pub output_file: PathBuf,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Default,
            attention_tone: true,
            audio_path: None,
            output_file: PathBuf::from("output.wav"),
        }
    }
}

/// Synthesize a complete EAS alert waveform from `zczc_message` and write it
/// to `options.output_file` (WAV, or MP3 when the extension is `.mp3`).
/// Returns the float sample buffer regardless of which format was written.
///
/// Missing narration input (`options.audio_path` naming a file that doesn't
/// exist) is the one fatal error this function can raise
/// ([`SameError::AudioFileNotFound`]); transcoder failures, for either the
/// narration downmix or the MP3 export, are logged and otherwise swallowed
/// (spec §7).
pub fn generate_eas_alert(zczc_message: &str, options: &AssembleOptions) -> Result<Vec<f32>> {
    generate_eas_alert_with(zczc_message, options, &Transcoder::default())
}

/// As [`generate_eas_alert`], but with an explicit [`Transcoder`] -- used by
/// tests to point at a stub binary, and by callers with a non-default
/// `ffmpeg` install location.
pub fn generate_eas_alert_with(
    zczc_message: &str,
    options: &AssembleOptions,
    transcoder: &Transcoder,
) -> Result<Vec<f32>> {
    let narration = match &options.audio_path {
        Some(path) if !path.as_os_str().is_empty() => Some(load_narration(path, transcoder)?),
        _ => None,
    };

    let synth = Synthesizer::new();
    let samples = synth.assemble(
        zczc_message,
        options.mode,
        options.attention_tone,
        narration.as_deref(),
    );
    debug!(samples = samples.len(), "assembled alert waveform");

    write_output(&samples, &options.output_file, transcoder);

    Ok(samples)
}

/// Downmix/resample `path` to 24 kHz mono 16-bit PCM via the transcoder and
/// load the result as float samples. A missing source file is fatal; a
/// transcoder failure is logged and yields an empty narration buffer
/// (spec §4.5 step 1).
fn load_narration(path: &Path, transcoder: &Transcoder) -> Result<Vec<f32>> {
    if !path.exists() {
        return Err(SameError::AudioFileNotFound {
            path: path.display().to_string(),
        });
    }

    let temp = tempfile::Builder::new()
        .prefix("same-eas-conv-")
        .suffix(".wav")
        .tempfile()?;

    match transcoder.to_pcm_wav(path, temp.path()) {
        Ok(()) => wav::read_wav(temp.path()).or_else(|e| {
            warn!(error = %e, "failed to read transcoded narration, proceeding without it");
            Ok(Vec::new())
        }),
        Err(e) => {
            warn!(error = %e, "narration transcode failed, proceeding without it");
            Ok(Vec::new())
        }
    }
}

/// Write `samples` to `output_file`: WAV directly, or via a temporary WAV
/// and an MP3 transcode when the extension is `.mp3`. All failures here are
/// non-fatal per spec §7 -- they are logged, and the caller still gets its
/// sample buffer back.
fn write_output(samples: &[f32], output_file: &Path, transcoder: &Transcoder) {
    let is_mp3 = output_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false);

    if !is_mp3 {
        if let Err(e) = wav::write_wav(output_file, samples) {
            warn!(error = %e, "failed to write WAV output");
        }
        return;
    }

    let temp = match tempfile::Builder::new()
        .prefix("same-eas-export-")
        .suffix(".wav")
        .tempfile()
    {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "failed to create temporary WAV for MP3 export");
            return;
        }
    };

    if let Err(e) = wav::write_wav(temp.path(), samples) {
        warn!(error = %e, "failed to write temporary WAV for MP3 export");
        return;
    }

    if let Err(e) = transcoder.to_mp3(temp.path(), output_file) {
        warn!(error = %e, "MP3 export failed");
    }
}
