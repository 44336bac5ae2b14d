#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use supplynet_core::config::{ProjectConfig, resolve_config};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "snet: structural fraud-risk analysis for supplier networks",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Risk weight config file. Defaults to `.supplynet/config.toml` when present.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }

    fn load_config(&self) -> anyhow::Result<ProjectConfig> {
        let project_root = env::current_dir().context("failed to resolve current directory")?;
        Ok(resolve_config(&project_root, self.config.as_deref())?)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Analysis",
        about = "Analyze a relationship list",
        long_about = "Build the supplier graph from a JSON relationship array and report trading loops, bridge providers, communities, and risk scores.",
        after_help = "EXAMPLES:\n    # Analyze a file\n    snet analyze relationships.json\n\n    # Read from stdin\n    cat relationships.json | snet analyze\n\n    # Emit machine-readable output\n    snet analyze relationships.json --format json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Analyze the built-in example",
        long_about = "Run the analysis over a small built-in list: a three-provider loop and one unrelated pair.",
        after_help = "EXAMPLES:\n    # Show the example report\n    snet example\n\n    # Emit machine-readable output\n    snet example --json"
    )]
    Example,

    #[command(
        next_help_heading = "Analysis",
        about = "Show graph statistics",
        long_about = "Summarize the supplier graph: node and edge counts, duplicates, self-loops, degree extremes, density, and components.",
        after_help = "EXAMPLES:\n    # Statistics for a file\n    snet stats relationships.json\n\n    # Emit machine-readable output\n    snet stats relationships.json --format json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    snet completions bash\n\n    # Generate zsh completions\n    snet completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn default_log_filter(verbose: bool, quiet: bool, debug_env: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose || debug_env {
        "supplynet=debug,info"
    } else {
        "supplynet=info,warn"
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env("SUPPLYNET_LOG").unwrap_or_else(|_| {
        EnvFilter::new(default_log_filter(
            verbose,
            quiet,
            env::var("DEBUG").is_ok(),
        ))
    });

    let format = env::var("SUPPLYNET_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: &Cli, output: OutputMode) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Analyze(args) => {
            let config = cli.load_config()?;
            cmd::analyze::run_analyze(args, &config.risk, output)
        }
        Commands::Example => {
            let config = cli.load_config()?;
            cmd::example::run_example(&config.risk, output)
        }
        Commands::Stats(args) => cmd::stats::run_stats(args, output),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let output = cli.output_mode();
    debug!(?output, command = ?cli.command, "starting");

    match run(&cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, json = output.is_json(), "command failed");
            let cli_error = output::to_cli_error(&err);
            if let Err(render_err) = output::render_error(output, &cli_error) {
                eprintln!("error: {}", cli_error.message);
                debug!(error = %render_err, "failed to render error");
            }
            ExitCode::FAILURE
        }
    }
}
