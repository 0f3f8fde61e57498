//! SAME Header Decoder CLI
//!
//! Decodes a SAME header string into a human-readable alert description.
//!
//! **Usage**:
//! ```bash
//! cargo run --bin same_decode -- "ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-"
//! ```

use std::env;
use std::process::ExitCode;

use same_eas::dictionary::Dictionary;
use same_eas::{decode_same, SameError};

fn main() -> ExitCode {
    same_eas::tracing_init::init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut header: Option<String> = None;
    let mut dictionary_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dictionary" => {
                i += 1;
                dictionary_path = args.get(i).cloned();
            }
            arg if !arg.starts_with('-') => {
                header = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                return ExitCode::FAILURE;
            }
        }
        i += 1;
    }

    let header = match header {
        Some(h) => h,
        None => {
            eprintln!("Usage: {} [--dictionary PATH] <ZCZC-header>", args[0]);
            return ExitCode::FAILURE;
        }
    };

    let loaded: Option<Dictionary> = match dictionary_path {
        Some(path) => match std::fs::File::open(&path)
            .map_err(SameError::from)
            .and_then(Dictionary::from_reader)
        {
            Ok(d) => Some(d),
            Err(e) => {
                eprintln!("Failed to load dictionary '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };
    let dictionary = loaded.as_ref().unwrap_or(Dictionary::default_dictionary());

    match decode_same(&header, dictionary) {
        Ok(alert) => {
            println!("{}", alert.formatted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to decode header: {e}");
            ExitCode::FAILURE
        }
    }
}
