// Command-line entry point for hopdot.

use clap::Parser;
use hopdot::application::{ConvertOutcome, ConvertUsecase, DEFAULT_OUTPUT, NO_TRACE_MESSAGE};
use hopdot::infrastructure::ScanLoader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// nmap XML output of a scan run with --traceroute
    input: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // stdout is reserved for the no-trace diagnostic
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let xml = ScanLoader::load(&cli.input)?;

    match ConvertUsecase::default().run(&xml, Path::new(DEFAULT_OUTPUT))? {
        ConvertOutcome::NoTraceData => {
            println!("{}", NO_TRACE_MESSAGE);
            Ok(ExitCode::from(1))
        }
        ConvertOutcome::Written { nodes, edges } => {
            info!(nodes, edges, "conversion completed, output written to {}", DEFAULT_OUTPUT);
            Ok(ExitCode::SUCCESS)
        }
    }
}
