// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Static heritage data and the quiz evaluator.
//!
//! - [`cities`]: the fixed set of Rajasthan cities shown on the map
//! - [`shows`]: recorded and live Kathputli performances per city
//! - [`quiz`]: quiz payload parsing, scoring and answer sessions

pub mod cities;
pub mod quiz;
pub mod shows;

pub use cities::{City, capitalize_first, cities, find_city, normalize_city};
pub use quiz::{Quiz, QuizError, QuizQuestion, QuizSession, QuizState, Verdict};
pub use shows::{Listing, Show, ShowKind, shows_for};
