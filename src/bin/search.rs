use anyhow::Result;
use clap::Parser;
use kms::models::UserQuery;
use kms::search::{validate_query, MAX_SEARCH_RESULTS};
use kms::{demo, ingest, Config, Language, SearchService, StorageService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "search")]
#[command(about = "Search the knowledge base (demo graphs and ingested documents)")]
struct Args {
    /// Query text
    query: String,

    /// Folder of .txt/.md/.json documents to ingest before searching (overrides config)
    #[arg(short, long)]
    documents: Option<PathBuf>,

    /// Language of queries and demo data (en, ru); overrides config
    #[arg(short, long)]
    language: Option<Language>,

    /// Do not load the demo graphs
    #[arg(long)]
    no_seed: bool,

    /// Print query suggestions instead of results
    #[arg(long)]
    suggest: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", config.kms.log_level.as_str()),
    )
    .init();

    let language = args.language.unwrap_or_else(|| config.language());
    let storage = Arc::new(StorageService::new());
    let search = SearchService::new(Arc::clone(&storage), language)
        .with_snippet_chars(config.search.snippet_chars)
        .with_suggestion_limit(config.search.suggestion_limit);

    if args.suggest {
        for suggestion in search.suggest_queries(&args.query) {
            println!("{}", suggestion);
        }
        return Ok(());
    }

    validate_query(&args.query)?;

    if config.demo.seed && !args.no_seed {
        demo::seed(&storage, language)?;
    }

    let documents_dir = args.documents.clone().or_else(|| config.demo.documents_dir.clone());
    if let Some(dir) = documents_dir {
        let report = ingest::ingest_dir(&dir, &storage)?;
        for error in &report.errors {
            log::warn!("Ingest error: {}", error);
        }
    }

    let start = Instant::now();
    let query = UserQuery::new("cli", args.query.as_str());
    let results = search.search(&query);
    let duration = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║ KMS Search Results                                                           ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝");
    println!("\nQuery: \"{}\"\n", query.text);

    if results.is_empty() {
        println!("No results found.");
    } else {
        for (rank, result) in results.iter().enumerate() {
            println!("─────────────────────────────────────────────────────────────────────────────");
            println!("Rank #{}: {} (relevance: {:.2})", rank + 1, result.title, result.relevance);
            println!("Type: {}  Source: {}", result.data_type, result.source);
            println!("{}", result.snippet);
            println!();
        }
        println!("─────────────────────────────────────────────────────────────────────────────");
    }

    let stats = storage.stats();
    println!("\nResults: {} (max {})", results.len(), MAX_SEARCH_RESULTS);
    println!("Searched: {} graphs, {} documents", stats.graphs, stats.documents);
    println!("Latency: {:?}", duration);

    Ok(())
}
