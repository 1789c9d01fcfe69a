// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! HTML mapping for display blocks.
//!
//! Each block kind maps to one element carrying the site's utility classes.
//! Runs of consecutive list items share a single `<ul>`. Text is escaped by
//! maud.

use maud::{Markup, html};

use crate::block::{BlockKind, DisplayBlock};

pub const CONTAINER_CLASS: &str = "prose prose-lg max-w-none";
pub const H1_CLASS: &str = "text-4xl md:text-5xl font-bold text-amber-900 mb-6 mt-8";
pub const H2_CLASS: &str = "text-2xl md:text-3xl font-bold text-red-800 mb-4 mt-6";
pub const H3_CLASS: &str = "text-xl md:text-2xl font-semibold text-amber-800 mb-3 mt-4";
pub const LIST_ITEM_CLASS: &str = "text-gray-700 leading-relaxed ml-6 mb-2 list-disc";
pub const PARAGRAPH_CLASS: &str = "text-gray-700 leading-relaxed mb-4 text-lg";
pub const SPACER_CLASS: &str = "h-2";

/// A run of list items, or any other single block.
enum Segment<'a> {
    List(Vec<&'a BlockKind>),
    Single(&'a BlockKind),
}

fn segments(blocks: &[DisplayBlock]) -> Vec<Segment<'_>> {
    let mut out: Vec<Segment<'_>> = Vec::new();
    for block in blocks {
        let kind = &block.kind;
        if !matches!(kind, BlockKind::ListItem(_)) {
            out.push(Segment::Single(kind));
            continue;
        }
        if let Some(Segment::List(items)) = out.last_mut() {
            items.push(kind);
        } else {
            out.push(Segment::List(vec![kind]));
        }
    }
    out
}

fn block_markup(kind: &BlockKind) -> Markup {
    html! {
        @match kind {
            BlockKind::Heading1(text) => {
                h1 class=(H1_CLASS) { (text) }
            },
            BlockKind::Heading2(text) => {
                h2 class=(H2_CLASS) { (text) }
            },
            BlockKind::Heading3(text) => {
                h3 class=(H3_CLASS) { (text) }
            },
            BlockKind::ListItem(text) => {
                li class=(LIST_ITEM_CLASS) { (text) }
            },
            BlockKind::Paragraph(text) => {
                p class=(PARAGRAPH_CLASS) { (text) }
            },
            BlockKind::Spacer => {
                div class=(SPACER_CLASS) {}
            },
        }
    }
}

/// Render blocks into a content fragment.
pub fn to_html(blocks: &[DisplayBlock]) -> Markup {
    let segments = segments(blocks);
    html! {
        div class=(CONTAINER_CLASS) {
            @for segment in &segments {
                @match segment {
                    Segment::List(items) => {
                        ul {
                            @for item in items {
                                (block_markup(item))
                            }
                        }
                    },
                    Segment::Single(kind) => {
                        (block_markup(kind))
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_heading_and_paragraph() {
        let html = to_html(&render("# Udaipur\nLakes and legends")).into_string();
        assert!(html.starts_with(&format!("<div class=\"{CONTAINER_CLASS}\">")));
        assert!(html.contains(&format!("<h1 class=\"{H1_CLASS}\">Udaipur</h1>")));
        assert!(html.contains(&format!("<p class=\"{PARAGRAPH_CLASS}\">Lakes and legends</p>")));
    }

    #[test]
    fn test_consecutive_list_items_share_a_list() {
        let html = to_html(&render("- wood\n- cloth\n\n- string")).into_string();
        assert_eq!(html.matches("<ul>").count(), 2);
        assert_eq!(html.matches("<li ").count(), 3);
        assert!(html.contains(&format!("<div class=\"{SPACER_CLASS}\"></div>")));
    }

    #[test]
    fn test_list_item_markup_inside_list() {
        let html = to_html(&render("Intro\n* <b>strings</b>\nOutro")).into_string();
        assert!(html.contains(&format!(
            "<ul><li class=\"{LIST_ITEM_CLASS}\">&lt;b&gt;strings&lt;/b&gt;</li></ul>"
        )));
        assert_eq!(html.matches("<li ").count(), html.matches("<ul>").count());
    }

    #[test]
    fn test_text_is_escaped() {
        let html = to_html(&render("## <script>alert(1)</script> & more")).into_string();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_blocks() {
        let html = to_html(&[]).into_string();
        assert_eq!(html, format!("<div class=\"{CONTAINER_CLASS}\"></div>"));
    }
}
