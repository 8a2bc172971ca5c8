//! Configuration management for the mdslice chunking engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SliceError};
use crate::core::xdg::XdgDirs;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Chunk assembly strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChunkMethod {
    /// Paragraph-accumulating strategy with structural awareness (default)
    Semantic,
    /// Fixed-size character windows with backward slide
    Length,
    /// One chunk per paragraph, sentence-packed when oversized
    Paragraph,
}

impl Default for ChunkMethod {
    fn default() -> Self {
        Self::Semantic
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub length: LengthConfig,
    #[serde(default)]
    pub paragraph: ParagraphConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub walker: WalkerConfig,
}

/// Core chunking parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Soft minimum chunk length in characters (not bytes!)
    #[serde(default = "default_chunk_min_length")]
    pub chunk_min_length: usize,

    /// Hard maximum chunk length in characters
    #[serde(default = "default_chunk_max_length")]
    pub chunk_max_length: usize,

    /// Minimum injected overlap length in characters
    #[serde(default = "default_overlap_min_length")]
    pub overlap_min_length: usize,

    /// Maximum injected overlap length in characters
    #[serde(default = "default_overlap_max_length")]
    pub overlap_max_length: usize,

    /// Whether to inject neighbor overlap into text chunks
    #[serde(default)]
    pub enable_overlap: bool,

    /// Strategy used to assemble chunks
    #[serde(default)]
    pub method: ChunkMethod,

    /// Patterns a whole trimmed paragraph must match to count as a title
    #[serde(default = "default_title_patterns")]
    pub title_patterns: Vec<String>,

    /// Patterns marking candidate structural cut positions
    #[serde(default = "default_break_patterns")]
    pub break_patterns: Vec<String>,
}

/// Parameters for the fixed-length strategy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LengthConfig {
    /// Window size in characters
    #[serde(default = "default_window_size")]
    pub chunk_size: usize,

    /// Backward slide between consecutive windows, in characters
    #[serde(default = "default_window_overlap")]
    pub chunk_overlap: usize,
}

/// Parameters for the paragraph-bounded strategy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParagraphConfig {
    /// Maximum paragraph chunk size before sentence packing kicks in
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Root directory for emitted chunk indexes
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Filename of the per-document chunk index
    #[serde(default = "default_index_filename")]
    pub index_filename: String,
}

/// File walking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalkerConfig {
    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

// Default value functions
fn default_chunk_min_length() -> usize {
    10
}

fn default_chunk_max_length() -> usize {
    150
}

fn default_overlap_min_length() -> usize {
    10
}

fn default_overlap_max_length() -> usize {
    50
}

fn default_window_size() -> usize {
    100
}

fn default_window_overlap() -> usize {
    20
}

fn default_max_chunk_size() -> usize {
    500
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./md_sliced")
}

fn default_index_filename() -> String {
    "chunk_index.json".to_string()
}

fn default_max_file_size() -> usize {
    10
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.md".to_string(), "*.markdown".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
        "**/.git/**".to_string(),
        "**/build/**".to_string(),
        "**/dist/**".to_string(),
    ]
}

fn default_title_patterns() -> Vec<String> {
    vec![
        // Markdown heading as the entire paragraph
        r"^#{1,6}\s.*$".to_string(),
        // Paragraph consisting solely of a bold span
        r"^\*\*[^\n]+\*\*$".to_string(),
    ]
}

fn default_break_patterns() -> Vec<String> {
    vec![
        // Heading lines
        r"\n#{1,6} ".to_string(),
        // Horizontal-rule-like markers
        r"\n###+".to_string(),
        // Bold paragraph used as a subtitle
        r"\n\n\*\*[^\n]+\*\*\n".to_string(),
        // Independent capitalized single-line paragraph
        r"\n\n[A-Z][^\n]*\n\n".to_string(),
    ]
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_min_length: default_chunk_min_length(),
            chunk_max_length: default_chunk_max_length(),
            overlap_min_length: default_overlap_min_length(),
            overlap_max_length: default_overlap_max_length(),
            enable_overlap: false,
            method: ChunkMethod::default(),
            title_patterns: default_title_patterns(),
            break_patterns: default_break_patterns(),
        }
    }
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_window_size(),
            chunk_overlap: default_window_overlap(),
        }
    }
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: default_max_chunk_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            index_filename: default_index_filename(),
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SliceError::InvalidConfig(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. MDSLICE_CONFIG env var
    /// 2. XDG config file (~/.config/mdslice/config.toml)
    /// 3. ./mdslice.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MDSLICE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("mdslice.toml").exists() {
                Self::from_file("mdslice.toml")?
            } else {
                Self::default()
            }
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(min) = env::var("MDSLICE_CHUNK_MIN_LENGTH") {
            if let Ok(v) = min.parse() {
                self.chunking.chunk_min_length = v;
            }
        }
        if let Ok(max) = env::var("MDSLICE_CHUNK_MAX_LENGTH") {
            if let Ok(v) = max.parse() {
                self.chunking.chunk_max_length = v;
            }
        }
        if let Ok(min) = env::var("MDSLICE_OVERLAP_MIN_LENGTH") {
            if let Ok(v) = min.parse() {
                self.chunking.overlap_min_length = v;
            }
        }
        if let Ok(max) = env::var("MDSLICE_OVERLAP_MAX_LENGTH") {
            if let Ok(v) = max.parse() {
                self.chunking.overlap_max_length = v;
            }
        }
        if let Ok(enabled) = env::var("MDSLICE_ENABLE_OVERLAP") {
            if let Ok(v) = enabled.parse() {
                self.chunking.enable_overlap = v;
            }
        }
        if let Ok(method) = env::var("MDSLICE_METHOD") {
            match method.to_lowercase().as_str() {
                "semantic" => self.chunking.method = ChunkMethod::Semantic,
                "length" => self.chunking.method = ChunkMethod::Length,
                "paragraph" => self.chunking.method = ChunkMethod::Paragraph,
                other => tracing::warn!("Ignoring unknown MDSLICE_METHOD value: {}", other),
            }
        }
        if let Ok(dir) = env::var("MDSLICE_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_max_length == 0 {
            return Err(SliceError::InvalidConfig(
                "Chunk max length must be non-zero".to_string(),
            ));
        }

        if self.chunking.chunk_min_length > self.chunking.chunk_max_length {
            return Err(SliceError::InvalidConfig(
                "Chunk min length cannot exceed chunk max length".to_string(),
            ));
        }

        if self.chunking.overlap_min_length > self.chunking.overlap_max_length {
            return Err(SliceError::InvalidConfig(
                "Overlap min length cannot exceed overlap max length".to_string(),
            ));
        }

        if self.length.chunk_size == 0 {
            return Err(SliceError::InvalidConfig(
                "Window chunk size must be non-zero".to_string(),
            ));
        }

        if self.length.chunk_overlap >= self.length.chunk_size {
            return Err(SliceError::InvalidConfig(
                "Window overlap must be less than window chunk size".to_string(),
            ));
        }

        if self.paragraph.max_chunk_size == 0 {
            return Err(SliceError::InvalidConfig(
                "Paragraph max chunk size must be non-zero".to_string(),
            ));
        }

        for pattern in self
            .chunking
            .title_patterns
            .iter()
            .chain(self.chunking.break_patterns.iter())
        {
            Regex::new(pattern).map_err(|e| {
                SliceError::InvalidConfig(format!("Invalid pattern '{pattern}': {e}"))
            })?;
        }

        if self.walker.max_file_size_mb == 0 {
            return Err(SliceError::InvalidConfig(
                "Max file size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration at startup
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Chunk length: {}-{} chars",
            self.chunking.chunk_min_length,
            self.chunking.chunk_max_length
        );
        tracing::info!(
            "  Overlap: {} ({}-{} chars)",
            if self.chunking.enable_overlap {
                "enabled"
            } else {
                "disabled"
            },
            self.chunking.overlap_min_length,
            self.chunking.overlap_max_length
        );
        tracing::info!("  Method: {:?}", self.chunking.method);
        tracing::info!(
            "  Window: {} chars, {} overlap",
            self.length.chunk_size,
            self.length.chunk_overlap
        );
        tracing::info!("  Paragraph cap: {} chars", self.paragraph.max_chunk_size);
        tracing::info!("  Output dir: {:?}", self.output.dir);
        tracing::info!("  Index filename: {}", self.output.index_filename);
        tracing::info!(
            "  Walker: {} include, {} exclude patterns, max {} MB",
            self.walker.include_patterns.len(),
            self.walker.exclude_patterns.len(),
            self.walker.max_file_size_mb
        );
    }
}
