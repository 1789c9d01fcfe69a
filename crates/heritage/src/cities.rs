// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Cities with a Kathputli tradition, with approximate center coordinates.

use serde::Serialize;

/// A city on the map.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub description: &'static str,
}

impl City {
    /// Lower-case route segment, e.g. `jaipur`.
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

const CITIES: [City; 8] = [
    City {
        name: "Jaipur",
        lat: 26.915,
        lng: 75.82,
        description: "The Pink City - Center of traditional Kathputli art",
    },
    City {
        name: "Udaipur",
        lat: 24.57127,
        lng: 73.691544,
        description: "City of Lakes - Home to royal puppet traditions",
    },
    City {
        name: "Jodhpur",
        lat: 26.263863,
        lng: 73.008957,
        description: "The Blue City - Famous for folk puppet shows",
    },
    City {
        name: "Bikaner",
        lat: 28.027138,
        lng: 73.302155,
        description: "Desert City - Ancient puppetry heritage",
    },
    City {
        name: "Jaisalmer",
        lat: 26.911661,
        lng: 70.922928,
        description: "Golden City - Traditional desert puppet performances",
    },
    City {
        name: "Ajmer",
        lat: 26.449896,
        lng: 74.639915,
        description: "Spiritual City - Rich in cultural puppet traditions",
    },
    City {
        name: "Pushkar",
        lat: 26.4902,
        lng: 74.5509,
        description: "Sacred City - Famous for puppet fairs",
    },
    City {
        name: "Kota",
        lat: 25.162998,
        lng: 75.845322,
        description: "Educational Hub - Preserving traditional arts",
    },
];

/// All cities, in map order.
pub fn cities() -> &'static [City] {
    &CITIES
}

/// Case-insensitive lookup by name.
pub fn find_city(name: &str) -> Option<&'static City> {
    let name = name.trim();
    CITIES.iter().find(|city| city.name.eq_ignore_ascii_case(name))
}

/// Upper-case the first character and keep the rest as typed.
///
/// Content requests use this form: `jaipur` becomes `Jaipur`, `jAIPUR`
/// becomes `JAIPUR`.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character and lower-case the rest.
///
/// Show listings are keyed by this form.
pub fn normalize_city(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
