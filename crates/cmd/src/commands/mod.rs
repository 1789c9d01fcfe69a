// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod cities;
pub mod content;
pub mod init;
pub mod page;
pub mod quiz;
pub mod render;
pub mod shows;

pub use cities::cities_command;
pub use content::{article_command, tutorial_command};
pub use init::init_command;
pub use page::{PageKind, page_command};
pub use quiz::{interactive_quiz_command, quiz_command};
pub use render::render_command;
pub use shows::shows_command;
