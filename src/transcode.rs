//! External audio transcoder invocation.
//!
//! The assembler's two suspension points (spec §5): downmixing/resampling
//! narration audio to 24 kHz mono 16-bit PCM WAV before synthesis, and
//! encoding the finished alert to MP3 after synthesis. Both shell out to an
//! external transcoder binary (`ffmpeg`-compatible CLI) via
//! [`std::process::Command`] using the exact argument shapes spec §6 gives.
//!
//! Every call target is a per-invocation [`tempfile::NamedTempFile`] path
//! rather than the fixed literals (`temp_conversion.wav`, `temp_export.wav`)
//! spec §9 flags as unsafe under concurrent use -- the file is created (and
//! so reserved) before the subprocess runs, and removed on every exit path
//! by `NamedTempFile`'s own `Drop`.

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::error::{Result, SameError};

/// Name (or path) of the transcoder binary to invoke. Defaults to `ffmpeg`,
/// overridable for callers with a non-standard install.
#[derive(Debug, Clone)]
pub struct Transcoder {
    binary: String,
}

impl Default for Transcoder {
    fn default() -> Self {
        Self {
            binary: "ffmpeg".to_string(),
        }
    }
}

impl Transcoder {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Downmix/resample `input` to 24 kHz mono 16-bit PCM WAV at `output`.
    ///
    /// `ffmpeg -i INPUT -ar 24000 -ac 1 -acodec pcm_s16le OUT.wav`
    pub fn to_pcm_wav(&self, input: &Path, output: &Path) -> Result<()> {
        info!(?input, ?output, "invoking transcoder for narration downmix");
        self.run(&[
            "-y",
            "-i",
            path_str(input)?,
            "-ar",
            "24000",
            "-ac",
            "1",
            "-acodec",
            "pcm_s16le",
            path_str(output)?,
        ])
    }

    /// Encode a WAV file to MP3 at 128 kbps CBR via `libmp3lame`.
    ///
    /// `ffmpeg -i IN.wav -codec:a libmp3lame -b:a 128k OUT.mp3`
    pub fn to_mp3(&self, input: &Path, output: &Path) -> Result<()> {
        info!(?input, ?output, "invoking transcoder for MP3 export");
        self.run(&[
            "-y",
            "-i",
            path_str(input)?,
            "-codec:a",
            "libmp3lame",
            "-b:a",
            "128k",
            path_str(output)?,
        ])
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| SameError::Transcode {
                detail: format!("failed to launch {}: {e}", self.binary),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(%stderr, "transcoder exited with failure");
            Err(SameError::Transcode {
                detail: format!("{} exited with {}: {stderr}", self.binary, output.status),
            })
        }
    }
}

fn path_str(p: &Path) -> Result<&str> {
    p.to_str().ok_or_else(|| SameError::Transcode {
        detail: format!("non-UTF8 path: {}", p.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_transcode_error_not_a_panic() {
        crate::tracing_init::init_test_tracing();
        let t = Transcoder::new("definitely-not-a-real-binary-xyz");
        let err = t
            .to_pcm_wav(Path::new("in.wav"), Path::new("out.wav"))
            .unwrap_err();
        assert!(matches!(err, SameError::Transcode { .. }));
    }
}
