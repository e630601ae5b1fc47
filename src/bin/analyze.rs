use anyhow::{Context, Result};
use clap::Parser;
use kms::models::EntityType;
use kms::{
    analyze_sentiment, build_relations, create_knowledge_graph, generate_hypotheses, Config,
    EntityExtractor, Language, StorageService,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "analyze")]
#[command(about = "Extract entities and relations from text and report sentiment and hypotheses")]
struct Args {
    /// Text to analyse
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Name of the resulting knowledge graph
    #[arg(short, long, default_value = "Analysis")]
    name: String,

    /// Language of the text (en, ru); overrides config
    #[arg(short, long)]
    language: Option<Language>,

    /// Only list entities of this type (person, organization, location, date, concept)
    #[arg(short = 't', long = "type")]
    entity_type: Option<EntityType>,

    /// Print the graph and findings as JSON
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

    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!(
            "Usage: analyze <text> | analyze --file <path>\nExample: analyze \"Company Microsoft in Seattle presented Windows 11 12.15.2024\""
        ),
    };

    let language = args.language.unwrap_or_else(|| config.language());
    let lexicon = language.lexicon();

    let entities = EntityExtractor::new(language).extract(&text);
    let relations = build_relations(&entities, &text);
    let graph = create_knowledge_graph(&args.name, entities, relations)?;
    let sentiment = analyze_sentiment(&text, lexicon);
    let hypotheses = generate_hypotheses(&graph, lexicon);
    let relation_count = graph.relations.len();
    let entity_count = graph.entities.len();

    let storage = StorageService::new();
    let graph_id = storage.save_graph(graph);
    let listed = storage.find_entities(args.entity_type);

    if args.json {
        let report = json!({
            "graph": storage.get_graph(&graph_id),
            "entities": listed,
            "sentiment": sentiment,
            "hypotheses": hypotheses,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Graph: {} ({})", args.name, graph_id);
    println!("{:-<60}", "");
    println!("{:<14} {:<34} {:>10}", "Type", "Name", "Confidence");
    println!("{:-<60}", "");
    for entity in &listed {
        println!(
            "{:<14} {:<34} {:>10.2}",
            entity.entity_type.as_str(),
            entity.name,
            entity.confidence
        );
    }
    println!("{:-<60}", "");
    match args.entity_type {
        Some(entity_type) => println!("Entities:  {} ({} {})", entity_count, listed.len(), entity_type),
        None => println!("Entities:  {}", entity_count),
    }
    println!("Relations: {}", relation_count);
    println!("Sentiment: {:.2}", sentiment);
    if hypotheses.is_empty() {
        println!("Hypotheses: none");
    } else {
        println!("Hypotheses:");
        for hypothesis in &hypotheses {
            println!("  - {}", hypothesis);
        }
    }

    Ok(())
}
