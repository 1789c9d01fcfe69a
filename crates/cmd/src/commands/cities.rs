// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use heritage::{City, cities};
use maud::{Markup, html};

use crate::common::{OutputFormat, with_newline};

/// List the mapped cities
pub fn cities_command<F>(format: OutputFormat, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    let output = match format {
        OutputFormat::Text => cities_text(cities()),
        OutputFormat::Html => cities_markup(cities()).into_string(),
        OutputFormat::Json => serde_json::to_string_pretty(cities())
            .with_context(|| "Failed to serialize cities")?,
    };
    handler(&with_newline(output));
    Ok(())
}

fn cities_text(cities: &[City]) -> String {
    let width = cities.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for city in cities {
        out.push_str(&format!(
            "{:<width$}  {:>9.5} {:>10.6}  {}\n",
            city.name, city.lat, city.lng, city.description
        ));
    }
    out
}

/// Cards linking to each city's pages
pub fn cities_markup(cities: &[City]) -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
            @for city in cities {
                div class="bg-white rounded-2xl shadow-lg p-6" {
                    h2 class="text-2xl font-bold text-amber-900 mb-2" { (city.name) }
                    p class="text-gray-700 mb-4" { (city.description) }
                    p class="text-sm text-gray-500" {
                        (format!("{:.4}°N, {:.4}°E", city.lat, city.lng))
                    }
                    nav class="flex gap-4 mt-4" {
                        @for (page, label) in [("article", "Heritage"), ("tutorial", "Tutorial"), ("quiz", "Quiz"), ("shows", "Shows")] {
                            a class="text-red-700 font-semibold" href=(format!("{}/{}.html", city.slug(), page)) { (label) }
                        }
                    }
                }
            }
        }
    }
}
