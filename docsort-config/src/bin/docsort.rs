//! `docsort`: sort document listings from the command line.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docsort_config::{
    SortSettings, SortSettingsSource,
    logging::{DEFAULT_LOG_FILTER, init_tracing},
};
use docsort_core::sorted_view;
use docsort_model::{Document, DocumentField, SortDirection};
use tracing::info;

#[derive(Parser)]
#[command(name = "docsort", about = "Order document listings by a sort config")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort a JSON array of documents and print the result
    Sort {
        /// File holding a JSON array of documents
        documents: PathBuf,
        /// Field to sort by (title, status, publishedAt, or a custom field)
        #[arg(long)]
        key: Option<DocumentField>,
        #[arg(long)]
        direction: Option<SortDirection>,
        /// Use this collection's configured order as the starting point
        #[arg(long)]
        collection: Option<String>,
        /// Print the sorted documents as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved sort settings and where they came from
    ShowConfig,
}

fn main() -> Result<()> {
    init_tracing(DEFAULT_LOG_FILTER)
        .context("failed to install tracing subscriber")?;

    let cli = Cli::parse();
    let (settings, source) = SortSettings::load_from_env()
        .context("failed to load sort settings")?;

    match cli.command {
        Command::Sort {
            documents,
            key,
            direction,
            collection,
            json,
        } => {
            let raw = fs::read_to_string(&documents)
                .with_context(|| format!("failed to read {}", documents.display()))?;
            let docs: Vec<Document> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid document list in {}", documents.display()))?;

            let config = settings.resolve(collection.as_deref(), key, direction);
            info!(documents = docs.len(), sort = %config, "sorting documents");

            let view = sorted_view(&docs, &config);
            if json {
                let rendered = serde_json::to_string_pretty(&view)
                    .context("failed to render sorted documents")?;
                println!("{rendered}");
            } else {
                for doc in view {
                    println!(
                        "{:<10} {:<26} {}",
                        doc.status,
                        doc.published_at.as_deref().unwrap_or("-"),
                        doc.title
                    );
                }
            }
        }
        Command::ShowConfig => {
            let origin = match &source {
                SortSettingsSource::Default => "built-in defaults".to_string(),
                SortSettingsSource::EnvInline => "inline json from environment".to_string(),
                SortSettingsSource::EnvPath(path) | SortSettingsSource::File(path) => {
                    path.display().to_string()
                }
            };
            let rendered = toml::to_string_pretty(&settings)
                .context("failed to render settings")?;
            println!("# source: {origin}");
            print!("{rendered}");
        }
    }

    Ok(())
}
