use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codex_content::{Category, FsContentStore};
use codex_engine::{CodexConfig, Encyclopedia, ItemView, Request, Response};

#[derive(Parser)]
#[command(name = "codex")]
#[command(version, about = "Browse and query the encyclopedia", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "codex.toml")]
    config: PathBuf,

    /// Data directory (overrides the config file and CODEX_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Search for a term or ask a question
    Ask {
        /// Free text; questions are detected automatically
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List the items of a category
    List {
        #[arg(value_parser = parse_category)]
        category: Category,
    },

    /// Show one item
    Show {
        #[arg(value_parser = parse_category)]
        category: Category,
        id: String,
    },
}

fn parse_category(s: &str) -> Result<Category, codex_content::ParseCategoryError> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CodexConfig::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?
        .with_env_overrides();
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("codex_content={0},codex_engine={0},codex_cli={0}", config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(data_dir = %config.data_dir.display(), "opening codex");

    let store = FsContentStore::new(&config.data_dir);
    let mut codex = Encyclopedia::from_config(store, &config).context("invalid configuration")?;
    codex.initialize();

    let request = match cli.command {
        Command::Ask { text } => Request::Submit(text.join(" ")),
        Command::List { category } => Request::ShowCategory(category),
        Command::Show { category, id } => Request::ShowItem { category, id },
    };
    let response = codex.handle(request);

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print_text(&response),
    }

    if let Response::Rejected(e) = &response {
        bail!("{e}");
    }
    Ok(())
}

fn print_text(response: &Response) {
    match response {
        Response::Question { text } => {
            println!("Question handed to the answer service: {text}");
        }
        Response::SearchResults { term, hits } => {
            if hits.is_empty() {
                println!("No results for '{term}'.");
            }
            for hit in hits {
                match hit.item.description() {
                    Some(desc) => println!("[{}] {} ({}): {}", hit.category, hit.item.name, hit.item.id, desc),
                    None => println!("[{}] {} ({})", hit.category, hit.item.name, hit.item.id),
                }
            }
        }
        Response::Listing(listing) => {
            println!("{}", listing.title);
            if listing.is_empty() {
                println!("No items in this category.");
            }
            for item in &listing.items {
                println!("  {} - {}", item.id, item.description().unwrap_or(&item.name));
            }
        }
        Response::Item(ItemView::Detail(page)) => {
            println!("{}\n", page.title);
            println!("{}", page.paragraphs.join("\n\n"));
        }
        Response::Item(ItemView::Unavailable { category, id, reason }) => {
            println!("Could not load the details of '{id}': {reason}");
            println!("Back to the listing: codex list {category}");
        }
        Response::Rejected(_) => {}
    }
}
