//! Interactive root-directory prompt.

use anyhow::Context;
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// Prompt for the disc root directory, re-asking until an existing directory
/// is given.
pub fn prompt_root() -> anyhow::Result<PathBuf> {
    let raw: String = Input::new()
        .with_prompt("Disc root directory")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() {
                Ok(())
            } else {
                Err(format!("not a directory: {}", input))
            }
        })
        .interact_text()
        .context("failed to read disc root from prompt")?;
    Ok(PathBuf::from(raw))
}
