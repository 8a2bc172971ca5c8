//! Argument parsing tests

use clap::Parser;
use mdslice::cli::{Cli, Commands, OutputFormat};
use mdslice::core::config::ChunkMethod;

#[test]
fn test_slice_defaults() {
    let cli = Cli::try_parse_from(["mdslice", "slice", "docs/"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::Slice(args) => {
            assert_eq!(args.path.to_str(), Some("docs/"));
            assert!(args.method.is_none());
            assert!(!args.enable_overlap);
            assert!(!args.quiet);
            assert!(args.include.is_empty());
        }
        _ => panic!("expected slice command"),
    }
}

#[test]
fn test_slice_full_flags() {
    let cli = Cli::try_parse_from([
        "mdslice",
        "slice",
        "notes.md",
        "-o",
        "out",
        "--method",
        "length",
        "--min-length",
        "20",
        "--max-length",
        "300",
        "--enable-overlap",
        "--overlap-min",
        "5",
        "--overlap-max",
        "40",
        "--index-filename",
        "index.json",
        "-i",
        "*.md",
        "-e",
        "**/drafts/**",
        "--quiet",
        "--format",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Slice(args) => {
            assert_eq!(args.method, Some(ChunkMethod::Length));
            assert_eq!(args.min_length, Some(20));
            assert_eq!(args.max_length, Some(300));
            assert!(args.enable_overlap);
            assert_eq!(args.overlap_min, Some(5));
            assert_eq!(args.overlap_max, Some(40));
            assert_eq!(args.index_filename.as_deref(), Some("index.json"));
            assert_eq!(args.include, vec!["*.md".to_string()]);
            assert_eq!(args.exclude, vec!["**/drafts/**".to_string()]);
            assert!(args.quiet);
        }
        _ => panic!("expected slice command"),
    }
}

#[test]
fn test_invalid_method_rejected() {
    let result = Cli::try_parse_from(["mdslice", "slice", "docs/", "--method", "token"]);
    assert!(result.is_err());
}

#[test]
fn test_show_config_parses() {
    let cli = Cli::try_parse_from(["mdslice", "show-config", "-p"]).unwrap();
    match cli.command {
        Commands::ShowConfig(args) => assert!(args.patterns),
        _ => panic!("expected show-config command"),
    }
}

#[test]
fn test_completions_parses() {
    let cli = Cli::try_parse_from(["mdslice", "completions", "bash"]).unwrap();
    assert!(matches!(cli.command, Commands::Completions(_)));
}

#[test]
fn test_missing_path_is_an_error() {
    assert!(Cli::try_parse_from(["mdslice", "slice"]).is_err());
}
