// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Line classifier for generated content.
//!
//! [`render`] turns a raw text blob into one [`DisplayBlock`] per input line.
//! Lines are sanitized (see [`sanitize`]) and then classified by prefix:
//!
//! | prefix  | block       |
//! |---------|-------------|
//! | `### `  | Heading3    |
//! | `## `   | Heading2    |
//! | `# `    | Heading1    |
//! | `- `    | ListItem    |
//! | `* `    | ListItem    |
//! | (empty) | Spacer      |
//! | other   | Paragraph   |
//!
//! The output feeds the presentation mappings in [`plain`] and [`html`].

pub mod block;
pub mod html;
pub mod layout;
pub mod plain;
pub mod sanitize;

pub use block::{BlockKind, DisplayBlock};
pub use sanitize::sanitize_line;

use diagnostics::*;

/// Prefix table, most specific marker first.
const PREFIXES: &[(&str, fn(String) -> BlockKind)] = &[
    ("### ", BlockKind::Heading3),
    ("## ", BlockKind::Heading2),
    ("# ", BlockKind::Heading1),
    ("- ", BlockKind::ListItem),
    ("* ", BlockKind::ListItem),
];

/// Classify an already sanitized line.
pub fn classify(line: &str) -> BlockKind {
    if line.is_empty() {
        return BlockKind::Spacer;
    }

    for (prefix, make) in PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return make(rest.to_string());
        }
    }

    BlockKind::Paragraph(line.to_string())
}

/// Render raw text into display blocks, one per `\n`-delimited line.
///
/// Empty input yields no blocks. Whitespace-only lines yield spacers.
pub fn render(content: &str) -> Vec<DisplayBlock> {
    if content.is_empty() {
        return Vec::new();
    }

    let blocks: Vec<DisplayBlock> = content
        .split('\n')
        .enumerate()
        .map(|(position, line)| DisplayBlock::new(position, classify(&sanitize_line(line))))
        .collect();

    let count = blocks.len();
    debug!("rendered {count} display blocks", count: count);
    blocks
}
