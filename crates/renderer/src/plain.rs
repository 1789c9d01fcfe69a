// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering of display blocks.

use crate::block::{BlockKind, DisplayBlock};

const BULLET: &str = "  • ";

/// Render blocks as plain text, one or two output lines per block.
///
/// Heading1 is upper-cased and underlined with `=`, Heading2 underlined
/// with `-`, Heading3 prefixed with `> `. Spacers become blank lines.
pub fn to_plain_text(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match &block.kind {
            BlockKind::Heading1(text) => {
                let upper = text.to_uppercase();
                let width = upper.chars().count();
                out.push_str(&upper);
                out.push('\n');
                out.push_str(&"=".repeat(width));
            }
            BlockKind::Heading2(text) => {
                out.push_str(text);
                out.push('\n');
                out.push_str(&"-".repeat(text.chars().count()));
            }
            BlockKind::Heading3(text) => {
                out.push_str("> ");
                out.push_str(text);
            }
            BlockKind::ListItem(text) => {
                out.push_str(BULLET);
                out.push_str(text);
            }
            BlockKind::Paragraph(text) => out.push_str(text),
            BlockKind::Spacer => {}
        }
        out.push('\n');
    }
    out
}
