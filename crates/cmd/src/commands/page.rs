// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use gemini::ContentProvider;
use heritage::quiz::load_quiz;
use heritage::{QuizState, find_city, shows_for};
use maud::Markup;
use renderer::html::to_html;
use renderer::layout::{PageContext, page};
use renderer::render;

use crate::commands::quiz::{quiz_markup, unavailable_markup};
use crate::commands::shows::shows_markup;

use diagnostics::*;

/// The four city pages
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageKind {
    Article,
    Tutorial,
    Quiz,
    Shows,
}

impl PageKind {
    fn title(&self, city: &str) -> String {
        match self {
            PageKind::Article => format!("{city} Kathputli Heritage"),
            PageKind::Tutorial => format!("Kathputli Making in {city} Style"),
            PageKind::Quiz => format!("Test Your Knowledge: {city} Kathputli"),
            PageKind::Shows => format!("Kathputli Shows in {city}"),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            PageKind::Article => "article",
            PageKind::Tutorial => "tutorial",
            PageKind::Quiz => "quiz",
            PageKind::Shows => "shows",
        }
    }
}

async fn page_content(provider: &dyn ContentProvider, kind: PageKind, city: &str) -> Markup {
    match kind {
        PageKind::Article => to_html(&render(&provider.article(city).await)),
        PageKind::Tutorial => to_html(&render(&provider.tutorial(city).await)),
        PageKind::Quiz => match load_quiz(&provider.quiz(city).await) {
            QuizState::Ready(quiz) => quiz_markup(&quiz),
            QuizState::Unavailable => unavailable_markup(),
        },
        PageKind::Shows => {
            let intro = render(&provider.shows_intro(city).await);
            shows_markup(city, &intro, &shows_for(city))
        }
    }
}

/// Write a standalone HTML page for one city to `out`
pub async fn page_command<F>(
    provider: &dyn ContentProvider,
    kind: PageKind,
    city: &str,
    out: &Path,
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    let title = kind.title(city);
    let document = page(&PageContext {
        title: &title,
        subtitle: find_city(city).map(|c| c.description),
        content: page_content(provider, kind, city).await,
    });

    let shown = out.display().to_string();
    std::fs::write(out, document).with_context(|| format!("Failed to write page: {shown}"))?;

    let kind_name = kind.as_str();
    info!(
        "Wrote {kind_name} page for {city} to {shown}",
        kind_name: kind_name, city: city, shown: shown
    );
    handler(&format!("Wrote {shown}\n"));
    Ok(())
}
