// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Standalone HTML document wrapper for rendered pages.

use maud::{DOCTYPE, Markup, html};

/// Version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const BODY_CLASS: &str = "min-h-screen bg-gradient-to-br from-amber-50 to-orange-50";
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com?plugins=typography";

/// Context passed to [`page`].
pub struct PageContext<'a> {
    /// Page title, e.g. "Jaipur Kathputli Quiz"
    pub title: &'a str,
    /// Optional line shown under the title
    pub subtitle: Option<&'a str>,
    /// Page body
    pub content: Markup,
}

/// Wrap content in a complete HTML document.
pub fn page(ctx: &PageContext<'_>) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("Kathputli Atlas v{}", VERSION));
                title { (ctx.title) " | Kathputli Atlas" }
                script src=(TAILWIND_CDN) {}
            }
            body class=(BODY_CLASS) {
                main class="max-w-4xl mx-auto px-4 py-12" {
                    header class="bg-gradient-to-r from-red-600 to-amber-600 rounded-3xl shadow-2xl p-8 mb-8 text-white" {
                        h1 class="text-4xl font-bold mb-2" { (ctx.title) }
                        @if let Some(subtitle) = ctx.subtitle {
                            p class="text-amber-50 text-lg" { (subtitle) }
                        }
                    }
                    article class="bg-white rounded-3xl shadow-2xl p-8 md:p-12" {
                        (ctx.content)
                    }
                }
            }
        }
    }
    .into_string()
}
