//! loxscan - token dumper for the Lox scripting language.
//!
//! With a file argument the whole file is scanned once; without one an
//! interactive prompt scans each line as it is entered.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lox_drv::error::{EX_DATAERR, EX_SOFTWARE, EX_USAGE};
use lox_drv::repl::run_prompt;
use lox_drv::{run_file, Config, DrvError, OutputFormat};

/// loxscan - scan Lox source into tokens
#[derive(Parser, Debug)]
#[command(name = "loxscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
struct Cli {
    /// Source file to scan (starts an interactive prompt when omitted)
    file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LOXSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LOXSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "LOXSCAN_NO_COLOR")]
    no_color: bool,

    /// Token output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Do not print the trailing EOF token
    #[arg(long)]
    hide_eof: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::from(EX_USAGE);
        },
        // --help and --version
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        },
    };

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<DrvError>()
                .map_or(EX_SOFTWARE, DrvError::exit_code);
            ExitCode::from(code)
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    match &cli.file {
        Some(path) => {
            let stdout = std::io::stdout();
            let stderr = std::io::stderr();
            let had_errors = run_file(path, &config, &mut stdout.lock(), &mut stderr.lock())?;
            Ok(if had_errors {
                ExitCode::from(EX_DATAERR)
            } else {
                ExitCode::SUCCESS
            })
        },
        None => {
            run_prompt(&config).context("interactive prompt failed")?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and
/// the default is `warn`. Logs go to stderr.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), DrvError> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Logging(e.to_string()))
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config, DrvError> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Command-line flags win over the configuration file.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.hide_eof {
        config.show_eof = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["loxscan", "script.lox"]);
        assert_eq!(cli.file, Some(PathBuf::from("script.lox")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_prompt() {
        let cli = Cli::parse_from(["loxscan"]);
        assert_eq!(cli.file, None);
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["loxscan", "--format", "json", "a.lox"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["loxscan", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_rejects_two_files() {
        assert!(Cli::try_parse_from(["loxscan", "a.lox", "b.lox"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "loxscan",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/loxscan.toml",
            "--hide-eof",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.hide_eof);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/loxscan.toml")));
    }

    #[test]
    fn test_overrides_win() {
        let cli = Cli::parse_from(["loxscan", "-f", "json", "--hide-eof"]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_eof);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cli = Cli::parse_from(["loxscan"]);
        let mut config = Config {
            format: OutputFormat::Json,
            show_eof: false,
            ..Config::default()
        };
        apply_overrides(&mut config, &cli);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_eof);
    }
}
