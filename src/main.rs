//! Command line entry point: analyzes the tree in an adjacency list file and
//! prints its report to stdout.
//!
//! ```text
//! tree-analyzer [--verbose] [--diameter <STRATEGY>] [--max-line-length <BYTES>] <PATH> <FIRST> <SECOND>
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tree_analyzer::model::VertexIndex;
use tree_analyzer::parser::line_parser::parse_unsigned;
use tree_analyzer::{Analyzer, AnalyzerError, DiameterStrategy, TreeReport};

/// Validate a rooted tree and report its root, branch lengths, diameter,
/// and the shortest path between two vertices
#[derive(Parser, Debug)]
#[command(name = "tree-analyzer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Adjacency list file; line 1 holds the vertex count, line i+2 the children of vertex i
    path: PathBuf,

    /// First endpoint of the reported shortest path
    #[arg(allow_negative_numbers = true)]
    first: String,

    /// Second endpoint of the reported shortest path
    #[arg(allow_negative_numbers = true)]
    second: String,

    /// Log parsing and analysis steps, including the parsed tree, to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Algorithm used to compute the diameter
    #[arg(short, long, value_enum, default_value_t = DiameterArg::Exhaustive)]
    diameter: DiameterArg,

    /// Reject input lines longer than this many bytes
    #[arg(short = 'l', long, value_name = "BYTES")]
    max_line_length: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DiameterArg {
    Exhaustive,
    TwoPass,
    Parallel,
}

impl From<DiameterArg> for DiameterStrategy {
    fn from(arg: DiameterArg) -> Self {
        match arg {
            DiameterArg::Exhaustive => DiameterStrategy::Exhaustive,
            DiameterArg::TwoPass => DiameterStrategy::TwoPass,
            DiameterArg::Parallel => DiameterStrategy::Parallel,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<TreeReport> {
    // Query vertices are checked before the file is touched
    let first = parse_vertex_arg(&cli.first)?;
    let second = parse_vertex_arg(&cli.second)?;

    let mut builder = Analyzer::builder().with_diameter_strategy(cli.diameter.into());
    if let Some(max) = cli.max_line_length {
        builder = builder.with_max_line_length(max);
    }
    let analyzer = builder.build()?;

    let input = std::fs::read(&cli.path)
        .map_err(AnalyzerError::from)
        .with_context(|| format!("Failed to read '{}'", cli.path.display()))?;
    let tree = analyzer.parse_tree(&input)?;
    debug!("Parsed tree:\n{tree}");

    Ok(analyzer.analyze_tree(&tree, first, second)?)
}

fn parse_vertex_arg(arg: &str) -> Result<VertexIndex, AnalyzerError> {
    parse_unsigned(arg).ok_or_else(|| {
        AnalyzerError::Usage(format!(
            "vertex '{arg}' is not a non-negative integer (usage: tree-analyzer <PATH> <FIRST> <SECOND>)"
        ))
    })
}
