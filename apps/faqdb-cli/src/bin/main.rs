use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use faqdb_core::config::Config;
use faqdb_core::loader::RecordLoader;
use faqdb_core::options::SearchOptionsOverrides;
use faqdb_core::traits::FaqSearch;
use faqdb_core::types::{CategorySelection, Facet, FaqRecord, FilterState};
use faqdb_search::FaqSearchEngine;
use faqdb_session::FaqSession;

#[derive(Parser)]
#[command(name = "faqdb", about = "Search and browse an FAQ record set")]
struct Cli {
    /// JSON file or directory of JSON files holding FAQ records.
    /// Defaults to `data.records_path` from faqdb.toml.
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    /// Directory holding faqdb.toml and faqdb.<env>.toml.
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter and rank records.
    Search {
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long)]
        limit: Option<usize>,
        /// Keep matches in input order.
        #[arg(long)]
        no_rank: bool,
    },
    /// Category facet counts.
    Facets,
    /// Autocomplete hints for a partial query.
    Suggest { query: String },
    /// Interactive session.
    Repl,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config_dir)?;
    let records = load_records(&cli, &config)?;
    let options = config.search_options()?;
    let custom_facets = config.custom_facets()?;

    match cli.command {
        Command::Search { query, category, limit, no_rank } => {
            let overrides = SearchOptionsOverrides {
                max_results: limit,
                enable_fuzzy_search: no_rank.then_some(false),
                ..Default::default()
            };
            let options = options.merge(&overrides);
            options.validate()?;
            let engine = FaqSearchEngine::new(records, options);
            let state = FilterState {
                search_query: query,
                selected_category: CategorySelection::from(category),
                ..Default::default()
            };
            let hits = engine.hits(&state);
            if cli.json {
                let results: Vec<&FaqRecord> = hits.iter().map(|h| &engine.records()[h.index]).collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{} result(s) for '{}' in {}\n", hits.len(), state.search_query, state.selected_category);
                for (i, hit) in hits.iter().enumerate() {
                    print_record(i + 1, &engine.records()[hit.index], Some(hit.score));
                }
            }
        }
        Command::Facets => {
            let mut engine = FaqSearchEngine::new(records, options);
            if let Some(custom) = custom_facets {
                engine = engine.with_custom_facets(custom);
            }
            let facets = engine.facets();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&facets)?);
            } else {
                print_facets(&facets);
            }
        }
        Command::Suggest { query } => {
            let suggestions = FaqSearchEngine::new(records, options).suggest(&query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                for s in suggestions {
                    println!("  {}", s);
                }
            }
        }
        Command::Repl => {
            let mut engine = FaqSearchEngine::new(records, options);
            if let Some(custom) = custom_facets {
                engine = engine.with_custom_facets(custom);
            }
            let session = FaqSession::with_engine(engine).with_debounce(config.debounce()?);
            repl(session, cli.json)?
        }
    }
    Ok(())
}

fn load_records(cli: &Cli, config: &Config) -> anyhow::Result<Vec<FaqRecord>> {
    // Resolve records path precedence: flag > data.records_path > ./faq.json
    let path = match &cli.records {
        Some(p) => p.clone(),
        None => config
            .records_path(&cli.config_dir)?
            .unwrap_or_else(|| cli.config_dir.join("faq.json")),
    };
    let records = RecordLoader::new()
        .load_path(&path)
        .with_context(|| format!("loading FAQ records from {}", path.display()))?;
    tracing::info!(records = records.len(), path = %path.display(), "records loaded");
    Ok(records)
}

fn print_record(rank: usize, record: &FaqRecord, score: Option<u32>) {
    let category = record.category.map_or("-", |c| c.key());
    match score {
        Some(score) => println!("{:>2}. [{}] {} (score {}, {})", rank, record.id, record.question, score, category),
        None => println!("{:>2}. [{}] {} ({})", rank, record.id, record.question, category),
    }
}

fn print_facets(facets: &[Facet]) {
    for facet in facets {
        println!("  {:<14} {:<20} {}", facet.key, facet.label, facet.count);
    }
}

fn show_help() {
    println!("Commands:");
    println!("  <text>         - Search for text");
    println!("  /cat <key>     - Select a category (\"all\" to reset)");
    println!("  /toggle <id>   - Open or close an answer");
    println!("  /clear         - Clear query and category");
    println!("  /facets        - List categories");
    println!("  /help          - Show this help message");
    println!("  /quit          - Exit");
}

fn render(session: &FaqSession, json: bool) -> anyhow::Result<()> {
    let view = session.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    println!("{} result(s)", view.total);
    for (i, record) in view.results.iter().enumerate() {
        print_record(i + 1, record, None);
        if session.state().open_items.contains(&record.id) {
            println!("      {}", record.answer);
        }
    }
    if !view.suggestions.is_empty() {
        println!("Suggestions: {}", view.suggestions.join(" | "));
    }
    Ok(())
}

/// Queue the query behind the configured debounce delay and wait it out.
/// Lines read from stdin arrive whole, so the latest query always wins.
fn settle_search(session: &mut FaqSession, query: &str) -> bool {
    let mut changed = session.schedule_search(query, Instant::now());
    while let Some(deadline) = session.search_deadline() {
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
        changed |= session.poll(Instant::now());
    }
    changed
}

fn repl(mut session: FaqSession, json: bool) -> anyhow::Result<()> {
    show_help();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("faq> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        let changed = match input.split_once(' ').unwrap_or((input, "")) {
            ("/quit" | "/q", _) => break,
            ("/help" | "/h", _) => {
                show_help();
                continue;
            }
            ("/facets" | "/f", _) => {
                print_facets(&session.engine().facets());
                continue;
            }
            ("/cat", key) if !key.trim().is_empty() => session.set_category(key.trim()),
            ("/toggle", id) if !id.trim().is_empty() => {
                session.toggle(id.trim());
                true
            }
            ("/clear", _) => session.clear(),
            (cmd, _) if cmd.starts_with('/') => {
                println!("Unknown command: {}", cmd);
                continue;
            }
            _ => settle_search(&mut session, input),
        };
        if changed {
            render(&session, json)?;
        }
    }
    Ok(())
}
