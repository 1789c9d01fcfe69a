// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use anyhow::{Context, Result};
use renderer::render;

use crate::common::{OutputFormat, format_blocks};

/// Classify and print arbitrary text read from `input`
pub fn render_command<R, F>(mut input: R, format: OutputFormat, mut handler: F) -> Result<()>
where
    R: Read,
    F: FnMut(&str),
{
    let mut content = String::new();
    _ = input
        .read_to_string(&mut content)
        .with_context(|| "Failed to read input")?;

    let blocks = render(&content);
    if blocks.is_empty() {
        return Ok(());
    }
    handler(&format_blocks(&blocks, format)?);
    Ok(())
}
