// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Kathputli performance listings per city.

use chrono::NaiveDate;
use serde::Serialize;

use crate::cities::normalize_city;

/// Whether a show is upcoming/streaming or a recording.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShowKind {
    Live,
    Past,
}

/// One performance record.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: &'static str,
    pub title: &'static str,
    /// ISO `YYYY-MM-DD`
    pub date: &'static str,
    #[serde(rename = "type")]
    pub kind: ShowKind,
    pub video_url: Option<&'static str>,
    pub description: &'static str,
}

impl Show {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Long US-style date, e.g. `December 15, 2023`. Falls back to the raw
    /// string when it does not parse.
    pub fn display_date(&self) -> String {
        match self.date() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.to_string(),
        }
    }
}

const JAIPUR: &[Show] = &[Show {
    id: "jp-1",
    title: "Royal Courts of Amber: A Kathputli Tale",
    date: "2023-12-15",
    kind: ShowKind::Past,
    video_url: Some("https://www.youtube.com/embed/MnWIIcVp4Ec"),
    description: "A traditional Jaipur-style Kathputli performance recreating scenes from the royal courts of Amber.",
}];

const UDAIPUR: &[Show] = &[Show {
    id: "ud-1",
    title: "Lakeside Legends: Tales of Mewar",
    date: "2024-02-05",
    kind: ShowKind::Past,
    video_url: Some("https://www.youtube.com/embed/K20jWnaEoPc"),
    description: "Puppeteers narrate heroic stories of the Mewar dynasty in a classic Udaipur lakeside setting.",
}];

const JODHPUR: &[Show] = &[Show {
    id: "jo-1",
    title: "Blue City Chronicles",
    date: "2023-11-02",
    kind: ShowKind::Past,
    video_url: Some("https://www.youtube.com/embed/dRmT7PXUzVs"),
    description: "A folk storytelling session using Kathputli to depict everyday life in the lanes of Jodhpur.",
}];

const AJMER: &[Show] = &[Show {
    id: "aj-1",
    title: "Sacred Stories of Ajmer",
    date: "2024-01-10",
    kind: ShowKind::Past,
    video_url: Some("https://www.youtube.com/embed/MbA4ZDBVdf8"),
    description: "A spiritual-themed Kathputli performance reflecting the devotional folk traditions of Ajmer.",
}];

const PUSHKAR: &[Show] = &[Show {
    id: "ps-1",
    title: "Pushkar Fair Puppet Special",
    date: "2023-11-20",
    kind: ShowKind::Past,
    video_url: Some("https://www.youtube.com/embed/b44Jp6JpgA4"),
    description: "A lively puppet performance inspired by the cultural vibrance of the Pushkar Camel Fair.",
}];

const BIKANER: &[Show] = &[Show {
    id: "bk-1",
    title: "Desert Tales of Bikaner",
    date: "2023-12-01",
    kind: ShowKind::Past,
    video_url: Some("https://www.youtube.com/embed/K_20ap8bGp8"),
    description: "Kathputli artists narrate desert folklore and royal legends from the sands of Bikaner.",
}];

const JAISALMER: &[Show] = &[Show {
    id: "js-1",
    title: "Golden Fort Stories",
    date: "2024-01-25",
    kind: ShowKind::Past,
    video_url: Some("https://www.youtube.com/embed/wpdiIohyNpw"),
    description: "Traditional puppet storytelling inspired by the history and mystery of Jaisalmer Fort.",
}];

const SHOWS_BY_CITY: &[(&str, &[Show])] = &[
    ("Jaipur", JAIPUR),
    ("Udaipur", UDAIPUR),
    ("Jodhpur", JODHPUR),
    ("Ajmer", AJMER),
    ("Pushkar", PUSHKAR),
    ("Bikaner", BIKANER),
    ("Jaisalmer", JAISALMER),
];

/// Shows for one city, in listing order.
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub shows: &'static [Show],
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn live(&self) -> impl Iterator<Item = &'static Show> {
        self.of_kind(ShowKind::Live)
    }

    pub fn past(&self) -> impl Iterator<Item = &'static Show> {
        self.of_kind(ShowKind::Past)
    }

    fn of_kind(&self, kind: ShowKind) -> impl Iterator<Item = &'static Show> {
        self.shows.iter().filter(move |show| show.kind == kind)
    }
}

/// Listing for a city name in any case. Unknown cities have no shows.
pub fn shows_for(city: &str) -> Listing {
    let key = normalize_city(city);
    let shows = SHOWS_BY_CITY
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(&[][..], |(_, shows)| *shows);
    Listing { shows }
}
