// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cmd::commands;
use cmd::common::{OutputFormat, build_provider, resolve_city};

use diagnostics::*;

#[derive(Parser)]
#[command(author, version, about = "Kathputli puppetry heritage of Rajasthan", long_about = None)]
#[command(name = "kathputli")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content provider configuration file
    #[arg(short, long, global = true, default_value = "kathputli.yaml")]
    config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an example configuration file
    Init {
        /// Where to write it (defaults to --config)
        path: Option<PathBuf>,
    },
    /// List the mapped cities
    Cities,
    /// Heritage article for a city
    Article { city: String },
    /// Puppet making tutorial for a city
    Tutorial { city: String },
    /// Quiz for a city: list questions, score answers, or take it interactively
    Quiz {
        city: String,
        /// Comma-separated answers, A-D or - to skip (e.g. "A,C,-,B,B")
        #[arg(short, long, conflicts_with = "interactive")]
        answers: Option<String>,
        /// Answer one question at a time from stdin
        #[arg(short, long)]
        interactive: bool,
    },
    /// Show listings for a city
    Shows { city: String },
    /// Classify text from a file, or stdin, into display blocks
    Render { file: Option<PathBuf> },
    /// Write a standalone HTML page
    Page {
        #[arg(value_enum)]
        kind: commands::PageKind,
        city: String,
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn print_output(output: &str) {
    print!("{output}");
    _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let format = cli.format;
    debug!("kathputli starting");

    match cli.command {
        Commands::Init { path } => {
            let path = path.unwrap_or(cli.config);
            commands::init_command(&path, print_output)
        }
        Commands::Cities => commands::cities_command(format, print_output),
        Commands::Article { city } => {
            let city = resolve_city(&city)?;
            let provider = build_provider(&cli.config)?;
            commands::article_command(&provider, &city, format, print_output).await
        }
        Commands::Tutorial { city } => {
            let city = resolve_city(&city)?;
            let provider = build_provider(&cli.config)?;
            commands::tutorial_command(&provider, &city, format, print_output).await
        }
        Commands::Quiz {
            city,
            answers,
            interactive,
        } => {
            let city = resolve_city(&city)?;
            let provider = build_provider(&cli.config)?;
            if interactive {
                let stdin = std::io::stdin();
                commands::interactive_quiz_command(&provider, &city, stdin.lock(), print_output)
                    .await
            } else {
                commands::quiz_command(&provider, &city, answers.as_deref(), format, print_output)
                    .await
            }
        }
        Commands::Shows { city } => {
            let city = resolve_city(&city)?;
            let provider = build_provider(&cli.config)?;
            commands::shows_command(&provider, &city, format, print_output).await
        }
        Commands::Render { file } => match file {
            Some(path) => {
                let input = std::fs::File::open(&path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                commands::render_command(input, format, print_output)
            }
            None => commands::render_command(std::io::stdin().lock(), format, print_output),
        },
        Commands::Page { kind, city, out } => {
            let city = resolve_city(&city)?;
            let provider = build_provider(&cli.config)?;
            commands::page_command(&provider, kind, &city, &out, print_output).await
        }
    }
}
