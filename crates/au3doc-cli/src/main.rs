use clap::{Parser, Subcommand};
use serde::Serialize;

use au3doc_stdlib::{lookup_hover, registry, CompletionEntry};

mod completer;

/// au3doc - AutoIt3 documentation lookup
#[derive(Parser)]
#[command(name = "au3doc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query hover and completion documentation for the AutoIt3 standard library")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the hover markdown for a name (case-insensitive)
    Hover {
        /// Function, keyword or macro name
        name: String,
    },
    /// List completion entries matching a prefix, with fuzzy fallback
    Complete {
        /// Name prefix to complete
        prefix: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Maximum number of matches to show
        #[arg(long, default_value_t = 15)]
        limit: usize,
    },
    /// List every registered name with its kind
    Dump {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct NamedEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    entry: &'a CompletionEntry,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hover { name } => hover_command(&name),
        Commands::Complete { prefix, json, limit } => complete_command(&prefix, json, limit),
        Commands::Dump { json } => dump_command(json),
    }
}

fn hover_command(name: &str) {
    match lookup_hover(name) {
        Some(hover) => println!("{hover}"),
        None => {
            eprintln!("Error: no documentation registered for '{name}'");
            std::process::exit(1);
        }
    }
}

fn complete_command(prefix: &str, json: bool, limit: usize) {
    let matches = completer::fuzzy_complete(prefix, limit);
    if matches.is_empty() {
        eprintln!("Error: nothing matches '{prefix}'");
        std::process::exit(1);
    }

    if json {
        let entries: Vec<NamedEntry> = matches
            .iter()
            .map(|m| NamedEntry {
                name: m.name,
                entry: m.entry,
            })
            .collect();
        print_json(&entries);
    } else {
        for m in &matches {
            println!("{:<30} {}", m.entry.insert_text, m.entry.detail);
        }
    }
}

fn dump_command(json: bool) {
    let completions = registry().completions();
    let mut names: Vec<&String> = completions.keys().collect();
    names.sort();

    if json {
        let entries: Vec<NamedEntry> = names
            .iter()
            .map(|name| NamedEntry {
                name: name.as_str(),
                entry: &completions[*name],
            })
            .collect();
        print_json(&entries);
    } else {
        for name in &names {
            let entry = &completions[*name];
            println!("{:<12} {}", entry.kind.as_str(), entry.insert_text);
        }
        println!("{} names registered", names.len());
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("Error: failed to serialize output: {err}");
            std::process::exit(1);
        }
    }
}
