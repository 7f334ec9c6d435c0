mod scan;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "endoscope",
    version,
    about = "Finds HTTP endpoints declared by Spring controllers in Java sources",
    long_about = "Endoscope statically scans Java source files for Spring-style controller \
                  types and reports every HTTP endpoint their mapping annotations declare, \
                  without compiling anything or resolving against a classpath."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan Java files or directories for declared endpoints
    #[command(
        long_about = "Parses every given .java file (directories are walked recursively, \
                      honoring ignore files) and prints one \"<METHOD> <path>\" line per \
                      endpoint found."
    )]
    Scan {
        /// Files or directories to scan
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Emit a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> endoscope_core::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Scan { paths, json } => scan::run(&paths, json),
    }
}
