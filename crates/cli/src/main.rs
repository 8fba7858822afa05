//! MediSearch CLI: query the medicine search service from a terminal.
//!
//! Runs the same submit cycle as the desktop view and prints whichever
//! branch the state settles on.

use clap::{Parser, Subcommand};
use std::io::IsTerminal;

use medisearch_core::card::ResultCard;
use medisearch_core::highlight::Highlighted;
use medisearch_core::{load_medisearch_config, messages, ClientConfig, SearchClient};
use medisearch_core::{SearchState, View};

/// MediSearch CLI: search the public medicine database.
#[derive(Parser)]
#[command(name = "ms", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Search endpoint URL (overrides .medisearch.toml)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for medicines
    Search {
        /// Search query
        query: String,

        /// Number of results to request
        #[arg(long)]
        top_k: Option<usize>,
    },
    /// Show search service statistics
    Stats,
}

const HL_OPEN: &str = "\x1b[1;31m";
const HL_CLOSE: &str = "\x1b[0m";

fn resolve_config(endpoint: Option<&str>, top_k: Option<usize>) -> ClientConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let mut config = load_medisearch_config(&cwd);
    if let Some(e) = endpoint {
        config = config.with_endpoint(e).unwrap_or_else(|e| {
            eprintln!("--endpoint: {e}");
            std::process::exit(2);
        });
    }
    if let Some(k) = top_k {
        config = config.with_top_k(k).unwrap_or_else(|e| {
            eprintln!("--top-k: {e}");
            std::process::exit(2);
        });
    }
    config
}

fn build_client(config: &ClientConfig) -> SearchClient {
    SearchClient::new(config).unwrap_or_else(|e| {
        eprintln!("Could not create HTTP client: {e}");
        std::process::exit(1);
    })
}

fn marked(h: &Highlighted, color: bool) -> String {
    if color {
        h.to_marked(HL_OPEN, HL_CLOSE)
    } else {
        h.to_marked("", "")
    }
}

fn print_card(card: &ResultCard, color: bool) {
    println!("{}", marked(&card.title, color));
    match &card.link {
        Some(link) => println!("  {}  <{}>", card.hostname, link),
        None => println!("  {}", card.hostname),
    }
    if let Some(badge) = &card.score_badge {
        println!("  {badge}");
    }
    println!("  {}", marked(&card.snippet, color));
    println!();
}

fn print_empty(term: &str) {
    eprintln!("{}", messages::NO_RESULTS_TITLE);
    let (before, after) = messages::NOT_IN_DATABASE;
    eprintln!("{before}{term}{after}");
    eprintln!("\n{}", messages::SUGGESTIONS_TITLE);
    for tip in messages::SUGGESTIONS {
        eprintln!("  • {tip}");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medisearch=warn".parse().expect("static directive")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, top_k } => {
            let config = resolve_config(cli.endpoint.as_deref(), top_k);
            let client = build_client(&config);

            let mut state = SearchState::new();
            state.query = query;
            medisearch_core::submit(&mut state, &client).await;

            match state.view() {
                View::Error(msg) => {
                    eprintln!("{msg}");
                    std::process::exit(1);
                }
                View::Results(results) if cli.json => {
                    println!("{}", serde_json::to_string_pretty(results).unwrap_or_default());
                }
                View::Empty(_) if cli.json => println!("[]"),
                View::Results(results) => {
                    let color = std::io::stdout().is_terminal();
                    eprintln!("{}\n", messages::result_count(results.len()));
                    for card in state.cards() {
                        print_card(&card, color);
                    }
                }
                View::Empty(term) => {
                    print_empty(term);
                    std::process::exit(1);
                }
                // A settled submit never stays in these.
                View::Initial | View::Loading => {}
            }
        }
        Commands::Stats => {
            let config = resolve_config(cli.endpoint.as_deref(), None);
            let client = build_client(&config);
            let stats = match client.stats().await {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(error = %e, "Stats request failed");
                    eprintln!("{}", messages::CONNECTION_ERROR);
                    std::process::exit(1);
                }
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats).unwrap_or_default());
            } else {
                println!("Status:       {}", stats.status);
                println!("Model loaded: {}", stats.model_loaded);
                println!("Documents:    {}", stats.total_documents);
                println!(
                    "Medicines:    {} ({} indexed)",
                    stats.total_medicaments, stats.indexed_medicaments
                );
                println!("Terms:        {}", stats.total_terms);
            }
        }
    }
}
