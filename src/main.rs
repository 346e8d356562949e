//! CLI entry point for commark

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use commark::buffer::{CursorPosition, SourceBuffer};
use commark::file_utils::{DEFAULT_MAX_FILE_SIZE, parse_file_size, read_source_file};
use commark::output::{
    HoverReport, OutputConfig, TerminalFormatter, print_json, print_markdown,
};
use commark::query::{Lookup, Miss, lookup_with};
use commark::registry::{CommentPattern, Registry};
use commark::scanner::ScanLimits;
use commark::walk::{WalkConfig, collect_source_files, language_id_for, scan_files};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "commark")]
#[command(about = "Show block comments from source files as markdown")]
#[command(version)]
struct Args {
    /// Files or directories to read
    #[arg(required_unless_present = "languages")]
    paths: Vec<PathBuf>,

    /// Show the comment around this line (1-based); needs a single file
    #[arg(short = 'l', long = "line")]
    line: Option<usize>,

    /// Cursor column (1-based), used with --line. Recorded in JSON output
    /// only: comments are found by line
    #[arg(short = 'c', long = "column", default_value = "1", requires = "line")]
    column: usize,

    /// Language id to use instead of detecting it from the file extension
    #[arg(long = "language", value_name = "ID")]
    language: Option<String>,

    /// Extra block comment delimiters for the language (e.g. --block-comment '{-' '-}')
    #[arg(
        long = "block-comment",
        num_args = 2,
        value_names = ["START", "END"],
        allow_hyphen_values = true
    )]
    block_comment: Vec<String>,

    /// List supported languages and their delimiters
    #[arg(long = "languages")]
    languages: bool,

    /// Output in JSON format
    #[arg(long = "json", conflicts_with = "markdown")]
    json: bool,

    /// Output as a Markdown document
    #[arg(long = "markdown", short = 'm', conflicts_with = "json")]
    markdown: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not respect .gitignore and hidden-file rules when walking directories
    #[arg(long = "no-ignore")]
    no_ignore: bool,

    /// Skip files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Number of parallel workers for multi-file scans
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Maximum file size to read (default: 1MB)
    /// Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,

    /// Stop looking for a comment boundary after this many lines in each direction
    #[arg(long = "max-scan-lines", value_name = "N")]
    max_scan_lines: Option<usize>,

    /// Print diagnostics to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("commark={}", level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build the registry, adding the --block-comment pair if given.
fn build_registry(args: &Args) -> commark::Result<Registry> {
    let mut registry = Registry::builtin();
    if let [start, end] = args.block_comment.as_slice() {
        let pattern = CommentPattern::new(start.clone(), end.clone())?;
        match &args.language {
            Some(id) => registry.register(id, pattern),
            None => {
                // Without --language, the pair applies to the detected language of each file
                let ids: Vec<String> = args
                    .paths
                    .iter()
                    .filter_map(|p| language_id_for(p, None).ok())
                    .collect();
                for id in ids {
                    registry.register(&id, pattern.clone());
                }
            }
        }
    }
    Ok(registry)
}

fn print_languages(registry: &Registry) {
    for (id, patterns) in registry.languages() {
        let delimiters: Vec<String> = patterns
            .iter()
            .map(|p| format!("{} {}", p.start, p.end))
            .collect();
        println!("{:<16} {}", id, delimiters.join(", "));
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let registry = match build_registry(&args) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("commark: {}", e);
            return e.exit_code();
        }
    };

    if args.languages {
        print_languages(&registry);
        return ExitCode::SUCCESS;
    }

    let max_file_size = match args.max_file_size.as_deref().map(parse_file_size) {
        None => DEFAULT_MAX_FILE_SIZE,
        Some(Ok(size)) => size,
        Some(Err(e)) => {
            eprintln!("commark: invalid --max-file-size: {}", e);
            return e.exit_code();
        }
    };

    let limits = ScanLimits {
        max_lines: args.max_scan_lines,
    };

    let output_config = OutputConfig {
        use_color: !args.markdown && should_use_color(args.color),
        show_location: true,
    };

    match args.line {
        Some(line) => run_hover(&args, &registry, line, max_file_size, limits, output_config),
        None => run_list(&args, &registry, max_file_size, limits, output_config),
    }
}

/// Show the comment around one cursor position.
fn run_hover(
    args: &Args,
    registry: &Registry,
    line: usize,
    max_file_size: u64,
    limits: ScanLimits,
    output_config: OutputConfig,
) -> ExitCode {
    let [path] = args.paths.as_slice() else {
        eprintln!("commark: --line needs exactly one file");
        return ExitCode::from(2);
    };
    if line == 0 || args.column == 0 {
        eprintln!("commark: --line and --column are 1-based");
        return ExitCode::from(2);
    }

    let result = language_id_for(path, args.language.as_deref()).and_then(|language| {
        let text = read_source_file(path, max_file_size)?;
        let buffer = SourceBuffer::new(&text);
        let cursor = CursorPosition::new(line - 1, args.column - 1);
        let lookup = lookup_with(registry, &buffer, cursor, &language, limits)?;
        Ok((language, cursor, lookup))
    });

    let (language, cursor, doc) = match result {
        Ok((language, cursor, Lookup::Found(doc))) => (language, cursor, doc),
        Ok((language, _, Lookup::Missed(Miss::UnsupportedLanguage))) => {
            eprintln!("commark: no block comment patterns for language '{}'", language);
            return ExitCode::from(2);
        }
        Ok((_, _, Lookup::Missed(miss))) => {
            tracing::debug!(?miss, "nothing to show");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("commark: {}", e);
            return e.exit_code();
        }
    };

    let written = if args.json {
        print_json(&HoverReport {
            path: path.clone(),
            language,
            cursor,
            comment: doc,
        })
    } else if args.markdown {
        println!("{}", doc.content);
        Ok(())
    } else {
        let config = OutputConfig {
            show_location: false,
            ..output_config
        };
        TerminalFormatter::new(config).print_doc(path, &doc)
    };

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("commark: error writing output: {}", e);
            ExitCode::from(3)
        }
    }
}

/// List every block comment in the given files and directories.
fn run_list(
    args: &Args,
    registry: &Registry,
    max_file_size: u64,
    limits: ScanLimits,
    output_config: OutputConfig,
) -> ExitCode {
    let config = WalkConfig {
        respect_ignore: !args.no_ignore,
        ignore_patterns: args.ignore.clone(),
        parallel_workers: args.jobs,
        max_file_size,
        limits,
        language: args.language.clone(),
    };

    let files = collect_source_files(&args.paths, &config);
    let mut reports = Vec::new();
    let mut failed = false;
    for (path, result) in files.iter().zip(scan_files(&files, registry, &config)) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failed = true;
                eprintln!("commark: warning: skipping '{}': {}", path.display(), e);
            }
        }
    }

    let written = if args.json {
        print_json(&reports)
    } else if args.markdown {
        print_markdown(&reports)
    } else {
        TerminalFormatter::new(output_config).print_reports(&reports)
    };

    match written {
        Ok(()) if failed && reports.is_empty() => ExitCode::from(3),
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("commark: error writing output: {}", e);
            ExitCode::from(3)
        }
    }
}
