use clap::{Args, Parser, Subcommand, ValueEnum};
use digraph_core::OutputFormat;
use std::path::PathBuf;

use crate::op::GraphOp;

#[derive(Parser)]
#[command(name = "digraph")]
#[command(about = "Build and query directed graphs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to a config file (or set DIGRAPH_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "DIGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay the built-in walkthrough over points P(1,2), P(3,4), P(5,6)
    Demo,
    /// Build a graph from arguments and apply operations to it
    Run(RunArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Nodes to start with, comma separated
    #[arg(long, value_delimiter = ',')]
    pub nodes: Vec<String>,

    /// An initial edge as SOURCE,TARGET (repeatable)
    #[arg(long = "edge", value_name = "SOURCE,TARGET")]
    pub edges: Vec<String>,

    /// Operation to apply, e.g. "add-edge A B" (repeatable, applied in order)
    #[arg(long = "op", value_name = "OP")]
    pub ops: Vec<GraphOp<String>>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
