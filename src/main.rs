use anyhow::Result;
use clap::Parser;
use kms::models::{EntityType, User, UserQuery, UserRole};
use kms::{
    analyze_sentiment, build_relations, create_knowledge_graph, demo, generate_hypotheses, ingest,
    Config, EntityExtractor, Language, SearchService, StorageService,
};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "kms")]
#[command(about = "Run the knowledge management pipeline end to end: extract, relate, store, search")]
struct Args {
    /// Text to analyse (defaults to a short product announcement)
    #[arg(long)]
    text: Option<String>,

    /// Query to run once the graph is stored
    #[arg(long)]
    query: Option<String>,

    /// Language of the text (en, ru); overrides config
    #[arg(long)]
    language: Option<Language>,
}

/// (text, graph name, query) used when none is given.
fn default_inputs(language: Language) -> (&'static str, &'static str, &'static str) {
    match language {
        Language::English => (
            "Company Microsoft in Seattle presented Windows 11 12.15.2024",
            "Technology Graph",
            "Microsoft",
        ),
        Language::Russian => (
            "Компания Microsoft в Сиэтле представила Windows 11 15.12.2024",
            "Технологический граф",
            "Microsoft",
        ),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", config.kms.log_level.as_str()),
    )
    .init();

    log::info!("Starting KMS v{}", env!("CARGO_PKG_VERSION"));

    let language = args.language.unwrap_or_else(|| config.language());
    let (default_text, graph_name, default_query) = default_inputs(language);
    let text = args.text.as_deref().unwrap_or(default_text);
    let query_text = args.query.as_deref().unwrap_or(default_query);

    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║ KMS Pipeline                                                                 ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝");

    // 1. User
    let user = User::new("analyst_1", UserRole::Analyst);
    println!("1. User: {} ({:?})", user.username, user.role);

    // 2. Storage, seeded from config
    let storage = Arc::new(StorageService::new());
    if config.demo.seed {
        demo::seed(&storage, language)?;
    }
    if let Some(dir) = config.documents_dir() {
        let report = ingest::ingest_dir(dir, &storage)?;
        println!(
            "2. Documents: {} loaded of {} discovered ({} errors)",
            report.loaded,
            report.discovered,
            report.errors.len()
        );
    } else {
        println!("2. Documents: none configured");
    }

    // 3. Entity extraction
    let extractor = EntityExtractor::new(language);
    let entities = extractor.extract(text);
    println!("3. Extracted {} entities from: \"{}\"", entities.len(), text);
    for entity in &entities {
        println!(
            "     {:<14} {:<30} {:.1}",
            entity.entity_type.as_str(),
            entity.name,
            entity.confidence
        );
    }

    // 4. Relations and graph
    let relations = build_relations(&entities, text);
    let entity_count = entities.len();
    let relation_count = relations.len();
    let graph = create_knowledge_graph(graph_name, entities, relations)?;
    println!("4. Graph '{}': {} entities, {} relations", graph.name, entity_count, relation_count);

    // 5. Store
    let hypotheses = generate_hypotheses(&graph, language.lexicon());
    let graph_id = storage.save_graph(graph);
    println!("5. Stored graph {}", graph_id);

    // 6. Search
    let search = SearchService::new(Arc::clone(&storage), language)
        .with_snippet_chars(config.search.snippet_chars)
        .with_suggestion_limit(config.search.suggestion_limit);
    let query = UserQuery::new(&user.id, query_text);
    let results = search.search(&query);
    println!("6. Search \"{}\": {} results", query.text, results.len());
    for (rank, result) in results.iter().enumerate() {
        println!(
            "     #{} {} [{}] relevance {:.2}",
            rank + 1,
            result.title,
            result.data_type,
            result.relevance
        );
    }

    // 7. Suggestions
    let suggestions = search.suggest_queries(query_text);
    println!("7. Suggestions: {}", suggestions.join(" | "));

    // 8. Hypotheses and sentiment
    println!("8. Hypotheses: {}", hypotheses.len());
    for hypothesis in &hypotheses {
        println!("     - {}", hypothesis);
    }
    println!("   Sentiment: {:.2}", analyze_sentiment(text, language.lexicon()));

    let stats = storage.stats();
    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║ Summary                                                                      ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝");
    println!("Graphs:        {}", stats.graphs);
    println!("Entities:      {}", stats.entities);
    println!("  people:      {}", storage.find_entities(Some(EntityType::Person)).len());
    println!("  orgs:        {}", storage.find_entities(Some(EntityType::Organization)).len());
    println!("Documents:     {}", stats.documents);
    println!("Relations:     {}", relation_count);
    println!("Results:       {}", results.len());
    println!("Hypotheses:    {}", hypotheses.len());

    Ok(())
}
