// textveil/src/commands/mod.rs
//! Command implementations for the textveil CLI, plus the input and
//! configuration plumbing they share.

pub mod redact;
pub mod scan;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use textveil_core::{merge_patterns, DetectionConfig};

/// Reads the input text from a file, or from stdin when no file is given.
///
/// Decoding and I/O errors are reported here, at the boundary; the core
/// engine never sees partially decoded text.
pub fn read_input(input_file: Option<&PathBuf>) -> Result<String> {
    match input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Assembles the effective detection config: built-in defaults, optionally
/// merged with a user YAML file, then filtered by enable/disable lists.
pub fn load_config(
    config_path: Option<&PathBuf>,
    enable: &[String],
    disable: &[String],
) -> Result<DetectionConfig> {
    let default_config = DetectionConfig::load_default_patterns()?;
    let user_config = match config_path {
        Some(path) => Some(DetectionConfig::load_from_file(path)?),
        None => None,
    };
    let mut config = merge_patterns(default_config, user_config);
    config.set_active_patterns(enable, disable);
    Ok(config)
}
