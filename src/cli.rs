use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "componentdoc-mcp")]
#[command(about = "Search design-system component docs from the terminal or over MCP", long_about = None)]
pub struct Cli {
    /// Config file (overrides COMPONENTDOC_CONFIG and the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Catalog file to serve instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio (default)
    Serve,
    Search {
        /// Query; quote multi-word queries
        query: String,
        #[arg(short = 'c', long)]
        category: Option<String>,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    List {
        #[arg(short = 'c', long)]
        category: Option<String>,
    },
    Inspect {
        key: String,
    },
}
