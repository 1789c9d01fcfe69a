// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Result, anyhow};
use gemini::config::API_KEY_ENV;
use gemini::create_example_config;

use diagnostics::*;

/// Write an example configuration file. An existing file is never replaced.
pub fn init_command<F>(path: &Path, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    let shown = path.display().to_string();
    if path.exists() {
        return Err(anyhow!("Configuration already exists at {shown}"));
    }

    create_example_config(path)?;
    info!("Wrote example configuration to {shown}", shown: shown);

    handler(&format!(
        "Created {shown}\nEdit api_key or set {API_KEY_ENV} to enable generated content.\n"
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kathputli.yaml");

        let mut output = String::new();
        init_command(&path, |s| output.push_str(s)).unwrap();
        assert!(output.starts_with("Created "));

        let config = gemini::load_config(&path).unwrap();
        assert_eq!(config.model, gemini::config::DEFAULT_MODEL);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kathputli.yaml");
        std::fs::write(&path, "model: keep-me\n").unwrap();

        let err = init_command(&path, |_| {}).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "model: keep-me\n");
    }
}
