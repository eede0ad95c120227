use std::env;
use std::path::{Path, PathBuf};

use supportdb_core::corpus::load_corpus;

// Rank a knowledge base and print results.
// Usage:
//   cargo run -p supportdb-text --example search -- your query words \
//     [--corpus ../../test_data/knowledge_base.json] [--limit 3]

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!(
            "Usage: cargo run -p supportdb-text --example search -- <query> [--corpus PATH] [--limit N]"
        );
        std::process::exit(1);
    }
    let mut words: Vec<&str> = Vec::new();
    let mut corpus: Option<PathBuf> = None;
    let mut limit: usize = 3;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--corpus" => {
                if i + 1 >= args.len() {
                    eprintln!("--corpus requires a path");
                    std::process::exit(2);
                }
                corpus = Some(PathBuf::from(&args[i + 1]));
                i += 2;
                continue;
            }
            "--limit" => {
                if i + 1 >= args.len() {
                    eprintln!("--limit requires a number");
                    std::process::exit(2);
                }
                limit = args[i + 1].parse()?;
                i += 2;
                continue;
            }
            s if s.starts_with("--") => {
                eprintln!("Unknown flag: {}", s);
                std::process::exit(2);
            }
            s => {
                words.push(s);
                i += 1;
                continue;
            }
        }
    }
    let query = words.join(" ");

    // Resolve corpus precedence: flag > SUPPORTDB_CORPUS > workspace fixture
    let corpus = if let Some(path) = corpus {
        path
    } else if let Ok(env_path) = env::var("SUPPORTDB_CORPUS") {
        PathBuf::from(env_path)
    } else {
        let base = Path::new(env!("CARGO_MANIFEST_DIR"))
            .ancestors()
            .nth(2)
            .unwrap_or(Path::new("."));
        base.join("test_data/knowledge_base.json")
    };

    let documents = load_corpus(&corpus)?;
    println!("Lexical search\n==============");
    println!("Corpus: {} ({} documents)", corpus.display(), documents.len());
    println!("Query: {} (limit {})\n", query, limit);

    let result = supportdb_text::search(&query, &documents, limit);
    println!("Intent: {}", result.intent);
    for (i, (doc, score)) in result.hits().enumerate() {
        println!(
            "{:>2}. score={:.3} id={} category={} title={}\n    key phrases: {}",
            i + 1,
            score,
            doc.id,
            doc.category,
            doc.title,
            supportdb_text::document_key_phrases(doc).join(", ")
        );
    }

    Ok(())
}
