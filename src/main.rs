use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lexis_core::{LexisConfig, OutputFormat};
use lexis_history::GitStore;
use miette::{Context, IntoDiagnostic, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lexis",
    version,
    about = "Word-frequency statistics for a text file tracked in git",
    long_about = "Counts the words of a tracked text file at the latest commit and, when the\n\
                   file has changed at least twice, lists the words added and removed by the\n\
                   most recent change.\n\n\
                   Examples:\n  \
                     lexis                           Analyze document.txt in the current repository\n  \
                     lexis --file notes/essay.md     Analyze another tracked file\n  \
                     lexis --format json             Machine-readable report"
)]
struct Cli {
    /// Repository path (default: current directory)
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Repo-relative path of the file to analyze (default: document.txt)
    #[arg(long)]
    file: Option<String>,

    /// Path to configuration file (default: .lexis.toml in the repository root)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        long_help = "Output format for the report.\n\n\
                       Formats:\n  \
                         text      Plain text (default)\n  \
                         json      Machine-readable JSON with camelCase keys\n  \
                         markdown  GitHub-flavored Markdown"
    )]
    format: Option<OutputFormat>,

    /// Enable verbose logging on stderr
    #[arg(long, short)]
    verbose: bool,

    /// When to use colors
    #[arg(long, default_value = "auto")]
    color: ColorChoice,
}

#[derive(Clone, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

fn init_logging(verbose: bool, use_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LEXIS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    };

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .color(use_color)
                .build(),
        )
    }))
    .into_diagnostic()?;
    human_panic::setup_panic!();
    init_logging(cli.verbose, use_color);

    let store = GitStore::open(&cli.path)?;
    let config_dir = store.workdir().unwrap_or_else(|| cli.path.clone());
    let config = LexisConfig::discover(cli.config.as_deref(), &config_dir)
        .wrap_err("loading configuration")?;

    let file = cli.file.unwrap_or(config.analysis.file);
    let format = cli.format.unwrap_or(config.output.format);
    debug!(path = %cli.path.display(), %file, %format, "starting analysis");

    let report = lexis_report::run(&store, &file)
        .wrap_err_with(|| format!("analyzing {file}"))?;

    let output = lexis_report::render(&report, format)?;
    match format {
        OutputFormat::Json => println!("{output}"),
        OutputFormat::Text | OutputFormat::Markdown => print!("{output}"),
    }

    Ok(())
}
