use std::env;

use tracing_subscriber::EnvFilter;

use supportdb_assistant::Assistant;
use supportdb_cli::{parse_args, Args, Command, USAGE};
use supportdb_core::config::Config;
use supportdb_core::corpus::load_corpus;
use supportdb_core::types::{Document, SearchResult};
use supportdb_text::document_key_phrases;
use supportdb_text::intent::intent_scores;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_documents(args: &Args, config: &Config) -> anyhow::Result<Vec<Document>> {
    let path = match &args.corpus {
        Some(path) => path.clone(),
        None => config.corpus_path()?,
    };
    Ok(load_corpus(&path)?)
}

fn print_hits(result: &SearchResult<'_>) {
    println!("Intent: {}", result.intent);
    if result.is_empty() {
        println!("No documents matched the current filter.");
    }
    for (i, (doc, score)) in result.hits().enumerate() {
        println!(
            "\n  {}. score={:.4}  id={}  category={}  title={}",
            i + 1,
            score,
            doc.id,
            doc.category,
            doc.title
        );
        if !doc.url.is_empty() {
            println!("     {}", doc.url);
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;

    match args.command {
        Command::Intent => {
            let intent = supportdb_text::classify_intent(&args.query);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&intent)?);
            } else {
                println!("Intent: {}", intent);
                for (candidate, hits) in intent_scores(&args.query) {
                    println!("  {:<16} {}", candidate.as_str(), hits);
                }
            }
        }
        Command::Phrases => {
            let documents = load_documents(&args, &config)?;
            let doc = documents
                .iter()
                .find(|d| d.id == args.query)
                .ok_or_else(|| {
                    supportdb_core::Error::NotFound(format!("document '{}'", args.query))
                })?;
            let phrases = document_key_phrases(doc);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&phrases)?);
            } else {
                println!("{}: {}", doc.title, phrases.join(", "));
            }
        }
        Command::Search | Command::Ask => {
            let mut settings = config.settings()?;
            args.apply(&mut settings);
            let assistant =
                Assistant::lexical(load_documents(&args, &config)?).with_settings(&settings);

            if args.command == Command::Search {
                let result = assistant.search(&args.query);
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print_hits(&result);
                }
                return Ok(());
            }

            let exchange = assistant.ask(&args.query);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&exchange)?);
            } else {
                println!("{}\n", exchange.answer.text);
                println!("Compliance score: {}%", exchange.answer.compliance_score);
                for source in &exchange.answer.sources {
                    println!(
                        "  [{:>3.0}%] {}  {}",
                        source.relevance * 100.0,
                        source.title,
                        source.url
                    );
                }
            }
        }
    }
    Ok(())
}
