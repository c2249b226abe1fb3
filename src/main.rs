//! parse-kernel CLI - locate the bundled constituency parser and print its command lines

use clap::{Parser, Subcommand};
use parse_kernel::config::{self, KernelConfig};
use parse_kernel::{CommandOptions, KernelAdapter, Language};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "parse-kernel")]
#[command(version)]
#[command(about = "Locate the bundled constituency parser and build its command line")]
#[command(long_about = r#"
parse-kernel resolves the bundled parser archive and prints the command
that feeds a text file into it. Commands are printed, never executed.

Example usage:
  parse-kernel path
  parse-kernel command --input text.txt --test
  parse-kernel command --input text.txt | sh
  parse-kernel server --port 8080
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Install root containing core/ (overrides config)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Engine language (overrides config)
    #[arg(short, long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show where the engine archive is expected
    Path,

    /// Print the command that pipes a file into the engine
    Command {
        /// Text file to process
        #[arg(short, long)]
        input: PathBuf,

        /// Extra engine argument (repeatable, kept in order)
        #[arg(short, long = "arg", allow_hyphen_values = true)]
        args: Vec<String>,

        /// Request the engine's test mode
        #[arg(short, long)]
        test: bool,

        /// Further engine arguments after `--`
        #[arg(last = true)]
        rest: Vec<String>,
    },

    /// Print the command that starts the engine in server mode
    Server {
        /// Listening port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write a starter config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

pub fn emit_success(
    output_mode: OutputMode,
    command: &str,
    data: serde_json::Value,
) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        let envelope = serde_json::json!({
            "ok": true,
            "command": command,
            "data": data,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };

    if let Err(e) = run(cli, output_mode) {
        if output_mode.is_human() {
            parse_kernel::ui::error(&format!("{:#}", e));
        } else {
            let envelope = serde_json::json!({ "ok": false, "error": format!("{:#}", e) });
            println!("{}", envelope);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::Version => commands::run_version(output_mode),

        Commands::Init { force } => commands::run_init(output_mode, &config_path, force),

        Commands::Path => {
            let adapter = build_adapter(&cli.root, cli.lang, &config_path)?;
            commands::run_path(output_mode, &adapter)
        }

        Commands::Command { input, args, test, rest } => {
            let adapter = build_adapter(&cli.root, cli.lang, &config_path)?;
            let options = CommandOptions::new(input).args(args).args(rest).test(test);
            commands::run_command(output_mode, &adapter, &options)
        }

        Commands::Server { port } => {
            let adapter = build_adapter(&cli.root, cli.lang, &config_path)?;
            commands::run_server(output_mode, &adapter, port)
        }
    }
}

fn build_adapter(
    root: &Option<PathBuf>,
    lang: Option<Language>,
    config_path: &std::path::Path,
) -> anyhow::Result<KernelAdapter> {
    let mut config: KernelConfig = config::load_config(Some(config_path))?.unwrap_or_default();
    if root.is_some() {
        config.root = root.clone();
    }
    if lang.is_some() {
        config.language = lang;
    }

    let adapter = KernelAdapter::from_config(&config)?;
    tracing::debug!(
        "Using kernel {} ({}, -l {})",
        adapter.kernel().display(),
        adapter.runtime(),
        adapter.language()
    );
    Ok(adapter)
}
