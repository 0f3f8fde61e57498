//! EAS Alert Waveform Encoder CLI
//!
//! Synthesizes a ZCZC message into an AFSK alert waveform and writes it to
//! a WAV (or MP3, by output extension) file.
//!
//! **Usage**:
//! ```bash
//! cargo run --bin same_encode -- \
//!     --mode nws --narration announce.mp3 --out alert.wav \
//!     "ZCZC-WXR-TOR-020173+0030-3441707-KEAX/NWS-"
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use same_eas::synth::Mode;
use same_eas::{generate_eas_alert, AssembleOptions};

fn usage(program: &str) {
    eprintln!("Usage: {program} [OPTIONS] <ZCZC-message>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --mode MODE        default|nws|sage|trilithic|digital (default: default)");
    eprintln!("  --no-attention     Omit the attention tone segment");
    eprintln!("  --narration PATH   Spoken narration audio to mix in before EOM");
    eprintln!("  --out PATH         Output file (default: output.wav; .mp3 transcodes)");
}

fn main() -> ExitCode {
    same_eas::tracing_init::init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut message: Option<String> = None;
    let mut options = AssembleOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                i += 1;
                let Some(name) = args.get(i) else {
                    eprintln!("--mode requires a value");
                    return ExitCode::FAILURE;
                };
                options.mode = match Mode::parse(name) {
                    Some(m) => m,
                    None => {
                        eprintln!("Unknown mode: {name}");
                        return ExitCode::FAILURE;
                    }
                };
            }
            "--no-attention" => options.attention_tone = false,
            "--narration" => {
                i += 1;
                options.audio_path = args.get(i).map(PathBuf::from);
            }
            "--out" => {
                i += 1;
                match args.get(i) {
                    Some(p) => options.output_file = PathBuf::from(p),
                    None => {
                        eprintln!("--out requires a value");
                        return ExitCode::FAILURE;
                    }
                }
            }
            arg if !arg.starts_with('-') => {
                message = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                return ExitCode::FAILURE;
            }
        }
        i += 1;
    }

    let message = match message {
        Some(m) => m,
        None => {
            usage(&args[0]);
            return ExitCode::FAILURE;
        }
    };

    match generate_eas_alert(&message, &options) {
        Ok(samples) => {
            println!(
                "Wrote {} ({:.2}s) to {}",
                options.output_file.display(),
                samples.len() as f32 / same_eas::wav::SAMPLE_RATE as f32,
                options.output_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to generate alert: {e}");
            ExitCode::FAILURE
        }
    }
}
