//! Example that reads a graph description from a file (or stdin) and prints
//! every query result.
//!
//! Usage:
//!   cargo run --example graph_report -- tests/data/two_blocks.txt
//!   cat tests/data/two_blocks.txt | cargo run --example graph_report
//!   cargo run --example graph_report -- --timings -

use std::io;
use std::process;

use clap::Parser;
use graphscan::{
    Graph, LoadError, Report, load, load_file,
    tracing_support::{LevelFilter, dump_analysis_timings, init_tracing},
};

/// Read a graph description and print its structural summary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path (use '-' or omit to read from stdin)
    input: Option<String>,

    /// Print time spent in each analysis to stderr
    #[arg(long)]
    timings: bool,

    /// Log loader diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn read_graph(input: Option<&str>) -> Result<Graph, LoadError> {
    match input {
        Some("-") | None => load(io::stdin().lock()),
        Some(path) => load_file(path),
    }
}

fn main() {
    let args = Args::parse();

    if args.timings || args.verbose {
        let level = if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::OFF
        };
        init_tracing(level);
    }

    let graph = match read_graph(args.input.as_deref()) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("{}", Report::new(Some(&graph)));

    if args.timings {
        dump_analysis_timings();
    }
}
