// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Per-line cleanup applied before classification.
//!
//! Generated text arrives with lightweight markdown emphasis and the odd
//! model artifact. Each line is reduced independently, in a fixed order:
//!
//! 1. fenced-code markers (```` ``` ```` with or without a language tag) drop the line
//! 2. lines mentioning "as an ai language model" (any case) drop the line
//! 3. bold `**text**` then `__text__` lose their markers
//! 4. italic `*text*` then `_text_` lose their markers
//! 5. the result is trimmed
//!
//! Trimming also strips the byte-order mark (U+FEFF). Emphasis spans never
//! cross `\r`, U+2028 or U+2029.
//!
//! Bold must run before italic, otherwise `**x**` would be read as two empty
//! italic spans. The italic patterns also eat stray single `*`/`_` pairs such
//! as `a * b * c` or `snake_case_name`; callers get exactly that behavior.

use regex::Regex;
use std::sync::LazyLock;

const FENCE: &str = "```";
const BOM: char = '\u{FEFF}';

static AI_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)as an ai language model").expect("artifact pattern"));

static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*").expect("bold pattern"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^\r\n\x{2028}\x{2029}]*?)__").expect("bold pattern"));

static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\r\n\x{2028}\x{2029}]*?)\*").expect("italic pattern"));
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^\r\n\x{2028}\x{2029}]*?)_").expect("italic pattern"));

fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Clean one line. The input is trimmed first; the output is trimmed again.
///
/// An empty result means the line carries nothing to display.
pub fn sanitize_line(line: &str) -> String {
    let line = trim(line);

    if line.starts_with(FENCE) {
        return String::new();
    }

    if AI_ARTIFACT.is_match(line) {
        return String::new();
    }

    let mut text = line.to_string();
    for pattern in [&*BOLD_STARS, &*BOLD_UNDERSCORES, &*ITALIC_STAR, &*ITALIC_UNDERSCORE] {
        text = pattern.replace_all(&text, "${1}").into_owned();
    }

    trim(&text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_trimmed() {
        assert_eq!(sanitize_line("   hello world \t"), "hello world");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(sanitize_line("\u{FEFF}# Title"), "# Title");
        assert_eq!(sanitize_line("\u{FEFF}```json"), "");
        assert_eq!(sanitize_line("**x** \u{FEFF}"), "x");
        assert_eq!(sanitize_line("a\u{FEFF}b"), "a\u{FEFF}b");
    }

    #[test]
    fn test_emphasis_stops_at_line_separators() {
        assert_eq!(sanitize_line("*a\u{2028}b*"), "*a\u{2028}b*");
        assert_eq!(sanitize_line("_a\u{2029}b_"), "_a\u{2029}b_");
        assert_eq!(sanitize_line("*a\rb*"), "*a\rb*");
        assert_eq!(sanitize_line("*a* \u{2028} *b*"), "a \u{2028} b");
    }

    #[test]
    fn test_fence_markers_dropped() {
        assert_eq!(sanitize_line("```"), "");
        assert_eq!(sanitize_line("```json"), "");
        assert_eq!(sanitize_line("   ```rust  "), "");
    }

    #[test]
    fn test_fence_must_lead_the_line() {
        assert_eq!(sanitize_line("use ``` to open a block"), "use ``` to open a block");
    }

    #[test]
    fn test_ai_artifact_any_case() {
        assert_eq!(sanitize_line("As an AI language model, I cannot do that."), "");
        assert_eq!(sanitize_line("Note: as an ai LANGUAGE model I think"), "");
    }

    #[test]
    fn test_bold_markers_stripped() {
        assert_eq!(sanitize_line("**Jaipur** and __Udaipur__"), "Jaipur and Udaipur");
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(sanitize_line("**a** middle **b**"), "a middle b");
    }

    #[test]
    fn test_italic_markers_stripped() {
        assert_eq!(sanitize_line("*soft* and _quiet_"), "soft and quiet");
    }

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(sanitize_line("**bold** and *italic*"), "bold and italic");
        assert_eq!(sanitize_line("***both***"), "both");
    }

    #[test]
    fn test_unpaired_marker_kept() {
        assert_eq!(sanitize_line("5 * 3"), "5 * 3");
        assert_eq!(sanitize_line("one _ two"), "one _ two");
    }

    #[test]
    fn test_stray_underscores_misfire() {
        // Pairs of single underscores are read as emphasis even inside identifiers
        assert_eq!(sanitize_line("call snake_case_name now"), "call snakecasename now");
        assert_eq!(sanitize_line("2 * 3 * 4"), "2  3  4");
        // An unclosed bold marker is an empty italic span
        assert_eq!(sanitize_line("**open only"), "open only");
    }

    #[test]
    fn test_substitution_edge_whitespace_trimmed() {
        assert_eq!(sanitize_line("** padded **"), "padded");
    }

    #[test]
    fn test_list_marker_survives() {
        assert_eq!(sanitize_line("* item two"), "* item two");
        assert_eq!(sanitize_line("- **Wood**: carved"), "- Wood: carved");
    }
}
