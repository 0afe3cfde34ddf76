//! graph-editor CLI entry point.
//!
//! Headless front end: imports a graph script and writes the canonical
//! export. Skipped lines are logged as warnings on stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use clap::Parser;

use graph_editor::storage::{FsStore, TextStore};
use graph_editor::{ExportOptions, reformat};

/// Normalize a graph script and report what was imported.
#[derive(Parser, Debug)]
#[command(
    name = "graph-editor",
    version = env!("GRAPH_EDITOR_VERSION"),
    about = "Import a graph script and write it back in canonical form"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Write output to this file instead of stdout (parent directories are created)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Registry map expression used in the `.set` lines
    #[arg(short = 'r', long = "registry", default_value = "this.utechgraph")]
    registry: String,

    /// Print node and edge counts to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graph_editor=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let options = ExportOptions {
        registry: cli.registry,
    };
    let (exported, report) = reformat(&text, &options);

    if cli.summary {
        eprintln!(
            "{} nodes, {} edges, {} duplicate connections, {} lines skipped",
            report.nodes,
            report.edges,
            report.duplicate_edges,
            report.skipped.len()
        );
    }

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = FsStore.write_text(Path::new(path), &exported) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", exported);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
