// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Display blocks: the typed output of the line classifier.

use serde::Serialize;

/// The kind of a display block and the cleaned text it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum BlockKind {
    Heading1(String),
    Heading2(String),
    Heading3(String),
    ListItem(String),
    Paragraph(String),
    /// A line that sanitized to nothing; keeps vertical spacing.
    Spacer,
}

impl BlockKind {
    /// Text carried by the block, `None` for spacers.
    pub fn text(&self) -> Option<&str> {
        match self {
            BlockKind::Heading1(text)
            | BlockKind::Heading2(text)
            | BlockKind::Heading3(text)
            | BlockKind::ListItem(text)
            | BlockKind::Paragraph(text) => Some(text),
            BlockKind::Spacer => None,
        }
    }

    /// Heading depth (1-3), `None` for non-headings.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            BlockKind::Heading1(_) => Some(1),
            BlockKind::Heading2(_) => Some(2),
            BlockKind::Heading3(_) => Some(3),
            _ => None,
        }
    }
}

/// One classified line, tagged with the position of the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBlock {
    /// Zero-based line ordinal. Layout order follows it.
    pub position: usize,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl DisplayBlock {
    pub fn new(position: usize, kind: BlockKind) -> Self {
        Self { position, kind }
    }

    /// Cleaned text; empty for spacers.
    pub fn text(&self) -> &str {
        self.kind.text().unwrap_or("")
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self.kind, BlockKind::Spacer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacer_text_is_empty() {
        let block = DisplayBlock::new(3, BlockKind::Spacer);
        assert_eq!(block.text(), "");
        assert!(block.is_spacer());
        assert_eq!(block.kind.text(), None);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(BlockKind::Heading1("a".into()).heading_level(), Some(1));
        assert_eq!(BlockKind::Heading3("a".into()).heading_level(), Some(3));
        assert_eq!(BlockKind::ListItem("a".into()).heading_level(), None);
    }

    #[test]
    fn test_serialize_shape() {
        let block = DisplayBlock::new(0, BlockKind::Heading2("Materials".into()));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"position": 0, "type": "heading2", "text": "Materials"})
        );

        let spacer = serde_json::to_value(DisplayBlock::new(1, BlockKind::Spacer)).unwrap();
        assert_eq!(spacer, serde_json::json!({"position": 1, "type": "spacer"}));
    }
}
