//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::{ChunkMethod, Config};
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show detection patterns as well
    #[arg(long, short = 'p')]
    pub patterns: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub output_dir: String,
    pub chunking: ChunkingView,
    pub length: LengthView,
    pub paragraph: ParagraphView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<PatternsView>,
}

#[derive(Debug, Serialize)]
pub struct ChunkingView {
    pub method: ChunkMethod,
    pub chunk_min_length: usize,
    pub chunk_max_length: usize,
    pub enable_overlap: bool,
    pub overlap_min_length: usize,
    pub overlap_max_length: usize,
}

#[derive(Debug, Serialize)]
pub struct LengthView {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Serialize)]
pub struct ParagraphView {
    pub max_chunk_size: usize,
}

#[derive(Debug, Serialize)]
pub struct PatternsView {
    pub title_patterns: Vec<String>,
    pub break_patterns: Vec<String>,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    xdg: &XdgDirs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let patterns = args.patterns.then(|| PatternsView {
        title_patterns: config.chunking.title_patterns.clone(),
        break_patterns: config.chunking.break_patterns.clone(),
    });

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        output_dir: config.output.dir.to_string_lossy().into_owned(),
        chunking: ChunkingView {
            method: config.chunking.method,
            chunk_min_length: config.chunking.chunk_min_length,
            chunk_max_length: config.chunking.chunk_max_length,
            enable_overlap: config.chunking.enable_overlap,
            overlap_min_length: config.chunking.overlap_min_length,
            overlap_max_length: config.chunking.overlap_max_length,
        },
        length: LengthView {
            chunk_size: config.length.chunk_size,
            chunk_overlap: config.length.chunk_overlap,
        },
        paragraph: ParagraphView {
            max_chunk_size: config.paragraph.max_chunk_size,
        },
        patterns,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  output_dir: {}", response.output_dir);
            println!("  chunking:");
            println!("    method: {:?}", response.chunking.method);
            println!("    chunk_min_length: {}", response.chunking.chunk_min_length);
            println!("    chunk_max_length: {}", response.chunking.chunk_max_length);
            println!("    enable_overlap: {}", response.chunking.enable_overlap);
            println!(
                "    overlap_min_length: {}",
                response.chunking.overlap_min_length
            );
            println!(
                "    overlap_max_length: {}",
                response.chunking.overlap_max_length
            );
            println!("  length:");
            println!("    chunk_size: {}", response.length.chunk_size);
            println!("    chunk_overlap: {}", response.length.chunk_overlap);
            println!("  paragraph:");
            println!("    max_chunk_size: {}", response.paragraph.max_chunk_size);
            if let Some(patterns) = &response.patterns {
                println!("  patterns:");
                println!("    title_patterns: {:?}", patterns.title_patterns);
                println!("    break_patterns: {:?}", patterns.break_patterns);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
