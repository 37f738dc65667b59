//! Command line front end: resolve and render blocks described in props files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use viberante::{is_valid_color, tokens, BlockProps, HtmlRenderer, StyleRecord, VisualBlock};

#[derive(Parser)]
#[command(name = "viberante", version, about = "Resolve design-token props into styles and HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved class string and inline style of a props file
    Style {
        /// Props document (.json, .yaml or .yml)
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render a props file, children included, to HTML
    Render {
        /// Props document (.json, .yaml or .yml)
        file: PathBuf,
    },
    /// Check whether a value is an accepted color
    Color { value: String },
    /// List the design token tables
    Tokens {
        /// Only show the named table
        #[arg(long)]
        table: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedOutput<'a> {
    class_name: &'a str,
    style: &'a StyleRecord,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Style { file, json } => {
            let block = load_block(&file)?;
            let class_name = block.resolve_class_name();
            let style = block.resolve_style();
            if json {
                let output = ResolvedOutput {
                    class_name: &class_name,
                    style: &style,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("class: {}", class_name);
                println!("style: {}", style.to_css());
            }
        }
        Command::Render { file } => {
            let block = load_block(&file)?;
            let renderer = HtmlRenderer::new()?;
            println!("{}", renderer.render_block(block)?);
        }
        Command::Color { value } => {
            if is_valid_color(&value) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Tokens { table } => {
            let mut shown = 0;
            for t in tokens::all_tables() {
                if table.as_deref().is_some_and(|name| name != t.name()) {
                    continue;
                }
                shown += 1;
                println!("{}:", t.name());
                for (token, value) in t.iter() {
                    println!("  {:<8} {}", token, value);
                }
            }
            if shown == 0 {
                anyhow::bail!("no token table named '{}'", table.unwrap_or_default());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_block(file: &Path) -> Result<VisualBlock> {
    let props = BlockProps::from_path(file)
        .with_context(|| format!("loading props from {}", file.display()))?;
    Ok(VisualBlock::from_props(props))
}
