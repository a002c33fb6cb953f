//! pagesetup - GitHub Pages deployment setup
//!
//! Usage:
//!   pagesetup                    # Detect and write the workflow (same as `init`)
//!   pagesetup init --dry-run     # Show what would be written
//!   pagesetup detect             # Only report the detected project type
//!   pagesetup template node      # Print a workflow template

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagesetup_core::commands::{
    DetectCommand, DetectOptions, SetupCommand, SetupOptions, TemplateCommand,
};
use pagesetup_core::types::ProjectType;

#[derive(Parser)]
#[command(name = "pagesetup", version)]
#[command(about = "Set up GitHub Pages deployment for a repository", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    init: InitArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the deployment workflow and .nojekyll marker (default)
    Init(InitArgs),

    /// Scan the repository and report the detected project type
    Detect {
        #[command(flatten)]
        target: TargetArgs,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Print a workflow template to stdout
    Template {
        /// Project type (node or static)
        #[arg(value_enum)]
        kind: KindArg,

        /// Repository root used for config and manifest lookup
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Default)]
struct TargetArgs {
    /// Repository root (defaults to the enclosing git working tree)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Skip detection and treat the project as this type
    #[arg(long = "type", value_enum)]
    kind: Option<KindArg>,
}

#[derive(Args, Clone, Default)]
struct InitArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Node,
    Static,
}

impl From<KindArg> for ProjectType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Node => ProjectType::Node,
            KindArg::Static => ProjectType::Static,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable progress
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
    /// No output on success
    Quiet,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pagesetup_core=debug,pagesetup=debug,warn"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init(args)) => run_init(args),
        Some(Commands::Detect { target, format }) => run_detect(target, format),
        Some(Commands::Template { kind, root }) => run_template(kind, root),
        None => run_init(cli.init),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let mut options = SetupOptions::new().with_dry_run(args.dry_run);
    if let Some(kind) = args.target.kind {
        options = options.with_project_type(kind.into());
    }

    let cmd = SetupCommand::with_defaults(args.target.root)?;
    tracing::debug!(
        root = %cmd.context().project_root().display(),
        dry_run = args.dry_run,
        "running setup"
    );
    if matches!(args.format, OutputFormat::Table) {
        output::print_scan_start(cmd.context().project_root());
    }

    let report = cmd.execute(&options)?;
    output::print_setup_report(&report, args.format)
}

fn run_detect(target: TargetArgs, format: OutputFormat) -> Result<()> {
    let mut options = DetectOptions::new();
    if let Some(kind) = target.kind {
        options = options.with_project_type(kind.into());
    }

    let cmd = DetectCommand::with_defaults(target.root)?;
    let report = cmd.execute(&options)?;
    output::print_detect_report(&report, format)
}

fn run_template(kind: KindArg, root: Option<PathBuf>) -> Result<()> {
    let cmd = TemplateCommand::with_defaults(root)?;
    print!("{}", cmd.render(kind.into())?);
    Ok(())
}
