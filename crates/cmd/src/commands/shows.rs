// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use gemini::ContentProvider;
use heritage::{Listing, Show, shows_for};
use maud::{Markup, html};
use renderer::html::to_html;
use renderer::plain::to_plain_text;
use renderer::{DisplayBlock, render};
use serde::Serialize;

use crate::common::{OutputFormat, with_newline};

const LIVE_TITLE: &str = "Live & Upcoming Shows";
const PAST_TITLE: &str = "Past Performances";
const EMPTY_TITLE: &str = "No Shows Available";
const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

fn empty_message(city: &str) -> String {
    format!(
        "There are currently no live or recorded performances available for {city}. \
         Check back soon for upcoming shows and recorded performances!"
    )
}

#[derive(Serialize)]
struct ShowsOutput<'a> {
    city: &'a str,
    intro: &'a [DisplayBlock],
    live: Vec<&'static Show>,
    past: Vec<&'static Show>,
}

/// Print the generated introduction followed by the city's listings
pub async fn shows_command<F>(
    provider: &dyn ContentProvider,
    city: &str,
    format: OutputFormat,
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    let intro = render(&provider.shows_intro(city).await);
    let listing = shows_for(city);

    let output = match format {
        OutputFormat::Text => shows_text(city, &intro, &listing),
        OutputFormat::Html => shows_markup(city, &intro, &listing).into_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&ShowsOutput {
            city,
            intro: &intro,
            live: listing.live().collect(),
            past: listing.past().collect(),
        })
        .with_context(|| "Failed to serialize shows")?,
    };
    handler(&with_newline(output));
    Ok(())
}

fn show_text(show: &Show) -> String {
    let mut out = format!("{}\n  {}\n  {}\n", show.title, show.display_date(), show.description);
    if let Some(url) = show.video_url {
        out.push_str(&format!("  {url}\n"));
    }
    out
}

fn shows_text(city: &str, intro: &[DisplayBlock], listing: &Listing) -> String {
    let mut out = to_plain_text(intro);
    let live: Vec<&Show> = listing.live().collect();
    let past: Vec<&Show> = listing.past().collect();

    if !live.is_empty() {
        out.push_str(&format!("\n{LIVE_TITLE}\n{}\n", "-".repeat(LIVE_TITLE.len())));
        for show in live {
            out.push_str(&show_text(show));
        }
    }

    if !past.is_empty() {
        out.push_str(&format!("\n{PAST_TITLE}\n{}\n", "-".repeat(PAST_TITLE.len())));
        for show in past {
            out.push_str(&show_text(show));
        }
    } else {
        out.push_str(&format!("\n{EMPTY_TITLE}\n{}\n", empty_message(city)));
    }
    out
}

fn show_card(show: &Show) -> Markup {
    html! {
        div class="bg-white rounded-2xl shadow-lg overflow-hidden" {
            @if let Some(url) = show.video_url {
                div class="aspect-video" {
                    iframe class="w-full h-full" src=(url) title=(show.title)
                        allow=(VIDEO_ALLOW) allowfullscreen {}
                }
            }
            div class="p-6" {
                h3 class="text-xl font-bold text-gray-800 mb-2" { (show.title) }
                p class="text-sm text-gray-500 mb-2" { (show.display_date()) }
                p class="text-gray-600" { (show.description) }
            }
        }
    }
}

/// Introduction, live and past sections, or the empty-state card
pub fn shows_markup(city: &str, intro: &[DisplayBlock], listing: &Listing) -> Markup {
    let live: Vec<&Show> = listing.live().collect();
    let past: Vec<&Show> = listing.past().collect();
    html! {
        section class="mb-8" { (to_html(intro)) }
        @if !live.is_empty() {
            section class="mb-8" {
                h2 class="text-3xl font-bold text-gray-800 mb-6" { (LIVE_TITLE) }
                div class="grid md:grid-cols-2 gap-6" {
                    @for show in &live { (show_card(show)) }
                }
            }
        }
        @if !past.is_empty() {
            section {
                h2 class="text-3xl font-bold text-gray-800 mb-6" { (PAST_TITLE) }
                div class="grid md:grid-cols-2 gap-6" {
                    @for show in &past { (show_card(show)) }
                }
            }
        } @else {
            div class="text-center py-12" {
                h3 class="text-2xl font-bold text-gray-800 mb-2" { (EMPTY_TITLE) }
                p class="text-gray-600" { (empty_message(city)) }
            }
        }
    }
}
