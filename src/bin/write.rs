//! recfile Writer Binary
//!
//! Writes the configured person records to a binary file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use recfile::config::DEFAULT_OUTPUT;
use recfile::record::ID_LEN;
use recfile::{Config, RecordError, SyncMode, RECORD_SIZE};
use tracing_subscriber::{fmt, EnvFilter};

/// recfile writer
#[derive(Parser, Debug)]
#[command(name = "recfile-write")]
#[command(about = "Write fixed-size person records to a binary file")]
#[command(version)]
struct Args {
    /// Output file (created or truncated)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// fsync the file before closing
    #[arg(long)]
    sync: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the size and status lines
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("recfile-write v{}", recfile::VERSION);

    let sync_mode = if args.sync {
        SyncMode::OnFinish
    } else {
        SyncMode::None
    };

    let config = match Config::builder()
        .output_path(&args.output)
        .sync_mode(sync_mode)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("sizeof(person)={}", RECORD_SIZE);
    println!("sizeof(int)={}", ID_LEN);

    match recfile::write_file(&config) {
        Ok(summary) => {
            tracing::info!(
                path = %config.output_path.display(),
                records = summary.records_written,
                "write complete"
            );
            println!("contents to file written successfully !");
            ExitCode::SUCCESS
        }
        Err(e @ RecordError::FileOpen { .. }) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("error writing file !");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
