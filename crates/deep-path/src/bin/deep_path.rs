//! `deep-path` — read and edit JSON documents by dot-separated path.
//!
//! Usage:
//!   deep-path get <path>            < doc.json
//!   deep-path set <path> <json>     < doc.json
//!   deep-path remove <path>         < doc.json
//!   deep-path append <path> <json>  < doc.json
//!   deep-path diff <original.json> <current.json>
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see dropped edits.

use deep_path::cli::{run, Command};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if command.reads_stdin() {
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    match run(&command, buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
