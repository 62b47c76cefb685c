// src/main.rs
mod batch;
mod documents;
mod extractors;
mod parser;
mod storage;
mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use batch::ParseJob;
use clap::Parser;
use extractors::patterns::contact_patterns;
use parser::{ParseResponse, ResumeParser};
use storage::StorageManager;
use utils::config::ParserConfig;
use utils::AppError;

/// Command Line Interface for the résumé field extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Résumé files to parse; `-` reads one document from stdin
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Declared type of every input file: pdf, docx/doc or txt/plain
    #[arg(short = 't', long)]
    file_type: String,

    /// Also write `<name>.json` and `<name>_meta.json` per input into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Debug mode - save pattern-annotated text dumps for debugging
    #[arg(short, long)]
    debug: bool,

    /// Characters of leading text searched for the candidate's name
    #[arg(long)]
    name_window: Option<usize>,

    /// Largest accepted input file, in bytes
    #[arg(long)]
    max_file_size: Option<u64>,

    /// Characters of leading text kept as the summary
    #[arg(long)]
    summary_chars: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (RUST_LOG, else info or debug)
    utils::logging::setup_logging(args.debug);
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Resolve configuration: defaults < environment < flags
    let config = ParserConfig::from_env()?.with_overrides(
        args.name_window,
        args.max_file_size,
        args.summary_chars,
    );
    tracing::debug!("Using configuration: {:?}", config);

    // 4. Load the entity model once; every parse shares it
    let parser = Arc::new(ResumeParser::with_default_model(config));

    // 5. Initialize storage if results should be written to disk
    let mut storage = match (&args.output_dir, args.debug) {
        (Some(dir), _) => Some(StorageManager::new(dir)?),
        (None, true) => Some(StorageManager::new("./output")?),
        (None, false) => None,
    };

    // 6. Parse every input
    let jobs: Vec<ParseJob> = args
        .files
        .iter()
        .map(|path| ParseJob { path: path.clone(), file_type: args.file_type.clone() })
        .collect();
    let responses = batch::parse_all(Arc::clone(&parser), &jobs).await;

    // 7. Report results
    let mut success_count = 0;
    let mut failure_count = 0;

    for (job, response) in jobs.iter().zip(&responses) {
        let json = serde_json::to_string_pretty(response)
            .map_err(|e| AppError::Processing(format!("Failed to serialize result: {}", e)))?;
        println!("{}", json);

        match response {
            ParseResponse::Parsed(resume) => {
                success_count += 1;
                if args.debug {
                    if let Some(storage) = storage.as_mut() {
                        let stem = storage.output_stem(&job.path);
                        let dump_path = storage
                            .base_dir()
                            .join("debug")
                            .join(format!("{}_annotated.txt", stem));
                        if let Err(e) = utils::match_debug::save_debug_dump(&resume.raw_text, &dump_path, &contact_patterns()) {
                            tracing::warn!("Failed to create debug dump: {}", e);
                        }
                    }
                }
            }
            ParseResponse::Failed { error } => {
                failure_count += 1;
                tracing::error!("Failed to parse {}: {}", job.path.display(), error);
            }
        }

        if let Some(storage) = storage.as_mut() {
            match storage.save_result(&job.path, response) {
                Ok(path) => tracing::debug!("Saved result to: {}", path.display()),
                Err(e) => tracing::error!("Failed to save result: {}", e),
            }
            match storage.save_metadata(&job.path, &job.file_type, response) {
                Ok(path) => tracing::debug!("Saved metadata to: {}", path.display()),
                Err(e) => tracing::error!("Failed to save metadata: {}", e),
            }
        }
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", success_count, failure_count);

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!("Failed to parse any of {} résumés", failure_count)));
    }

    Ok(())
}
