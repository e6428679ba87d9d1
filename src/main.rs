use clap::Parser;
use file_splitter::{split, ConsoleSink, SplitError, SplitJob};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Split target file path
    input_path: PathBuf,

    /// Output directory path
    output_dir: PathBuf,

    /// Chunk size in bytes, optionally suffixed with k, m or g
    #[clap(short, long, default_value = "1g")]
    chunk: String,

    /// Do not show any message except errors
    #[clap(short, long)]
    quiet: bool,

    /// Show detailed per-step messages
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SplitError> {
    let job = SplitJob::new(
        args.input_path,
        args.output_dir,
        &args.chunk,
        args.quiet,
        args.verbose,
    )?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(job.policy().default_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let report = split(&job, &mut ConsoleSink::new(job.policy()))?;
    tracing::debug!(
        parts = report.parts.len(),
        bytes = report.total_bytes(),
        "split {} into {}",
        job.input_path().display(),
        job.output_dir().display()
    );
    Ok(())
}
