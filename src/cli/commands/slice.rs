//! Slice command - chunk markdown into per-document indexes

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::{ChunkMethod, Config};
use crate::core::pipeline::SlicePipeline;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the slice command
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Markdown file or directory to process
    pub path: PathBuf,

    /// Output directory for chunk indexes
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Chunking strategy
    #[arg(long, short = 'm', value_enum)]
    pub method: Option<ChunkMethod>,

    /// Soft minimum chunk length in characters
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Maximum chunk length in characters
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Inject neighbor overlap into text chunks
    #[arg(long)]
    pub enable_overlap: bool,

    /// Minimum injected overlap length in characters
    #[arg(long)]
    pub overlap_min: Option<usize>,

    /// Maximum injected overlap length in characters
    #[arg(long)]
    pub overlap_max: Option<usize>,

    /// Filename of the per-document chunk index
    #[arg(long)]
    pub index_filename: Option<String>,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Slicing result response
#[derive(Debug, Serialize)]
pub struct SliceResponse {
    pub path: String,
    pub output_dir: String,
    pub files_processed: usize,
    pub chunks_created: usize,
    pub duration_secs: f64,
    pub generated_at: String,
}

/// Execute the slice command
pub fn execute(
    args: SliceArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = args.path.canonicalize().map_err(|e| {
        format!(
            "Invalid path '{}': {}. Make sure the path exists and is accessible.",
            args.path.display(),
            e
        )
    })?;

    // Command-line overrides win over file and environment config.
    if let Some(output) = args.output {
        config.output.dir = output;
    }
    if let Some(method) = args.method {
        config.chunking.method = method;
    }
    if let Some(min) = args.min_length {
        config.chunking.chunk_min_length = min;
    }
    if let Some(max) = args.max_length {
        config.chunking.chunk_max_length = max;
    }
    if args.enable_overlap {
        config.chunking.enable_overlap = true;
    }
    if let Some(min) = args.overlap_min {
        config.chunking.overlap_min_length = min;
    }
    if let Some(max) = args.overlap_max {
        config.chunking.overlap_max_length = max;
    }
    if let Some(filename) = args.index_filename {
        config.output.index_filename = filename;
    }
    if !args.include.is_empty() {
        config.walker.include_patterns = args.include;
    }
    if !args.exclude.is_empty() {
        config.walker.exclude_patterns = args.exclude;
    }

    let output_dir = config.output.dir.clone();
    let pipeline = SlicePipeline::new(config)?;

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Slicing {} into {}...",
            colors::file_path(&path.display().to_string()),
            colors::file_path(&output_dir.display().to_string())
        );
    }

    let stats = pipeline.process(&path)?;
    let duration_secs = stats.duration_ms as f64 / 1000.0;

    let response = SliceResponse {
        path: path.to_string_lossy().into_owned(),
        output_dir: output_dir.to_string_lossy().into_owned(),
        files_processed: stats.files_processed,
        chunks_created: stats.chunks_created,
        duration_secs,
        generated_at: stats.generated_at,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} files ({} chunks) in {}",
                colors::success("Sliced"),
                colors::number(&response.files_processed.to_string()),
                colors::number(&response.chunks_created.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            println!(
                "Indexes written under {}",
                colors::file_path(&response.output_dir)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
