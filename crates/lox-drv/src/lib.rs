//! lox-drv - Driver for the Lox lexer
//!
//! Reads Lox source from a file or an interactive prompt, scans it, and
//! prints the resulting tokens. Lexical errors are written to stderr as
//! `[line N] Error: message` and never stop the scan.
//!
//! # Exit status
//!
//! - `0` - success
//! - `64` - bad usage or configuration
//! - `65` - the source had lexical errors
//! - `66` - the input file could not be read

pub mod config;
pub mod error;
pub mod repl;

use std::io::Write;
use std::path::Path;

use lox_lex::{ScanOutput, Token};
use lox_util::Handler;
use tracing::{debug, info};

pub use config::{Config, OutputFormat};
pub use error::{DrvError, Result};

/// Scans `source`, writes its tokens to `out`, and records every lexical
/// error in `handler`.
pub fn run_source<W: Write>(
    source: &str,
    config: &Config,
    out: &mut W,
    handler: &Handler,
) -> Result<ScanOutput> {
    let output = lox_lex::scan(source);
    output.emit_into(handler);
    write_tokens(&output.tokens, config, out)?;
    Ok(output)
}

/// Writes tokens in the configured format.
pub fn write_tokens<W: Write>(tokens: &[Token], config: &Config, out: &mut W) -> Result<()> {
    let shown: Vec<&Token> = tokens
        .iter()
        .filter(|t| config.show_eof || !t.is_eof())
        .collect();

    match config.format {
        OutputFormat::Text => {
            for token in shown {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &shown)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Writes every diagnostic recorded in `handler`, one per line.
pub fn report_diagnostics<W: Write>(handler: &Handler, err: &mut W) -> Result<()> {
    for diag in handler.diagnostics() {
        writeln!(err, "{}", diag)?;
    }
    Ok(())
}

/// Scans a whole file. Returns true if it had lexical errors.
pub fn run_file<W: Write, E: Write>(
    path: &Path,
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    let source = std::fs::read_to_string(path).map_err(|source| DrvError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = source.len(), "scanning file");

    let handler = Handler::new();
    run_source(&source, config, out, &handler)?;
    report_diagnostics(&handler, err)?;

    debug!(errors = handler.error_count(), "file done");
    Ok(handler.has_errors())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, config: &Config) -> (String, Handler) {
        let handler = Handler::new();
        let mut out = Vec::new();
        run_source(source, config, &mut out, &handler).unwrap();
        (String::from_utf8(out).unwrap(), handler)
    }

    #[test]
    fn test_text_output() {
        let (text, handler) = render("var x = 1;", &Config::default());
        assert_eq!(
            text,
            "VAR var\nIDENTIFIER x\nEQUAL =\nNUMBER 1 1.0\nSEMICOLON ;\nEOF \n"
        );
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_hide_eof() {
        let config = Config {
            show_eof: false,
            ..Config::default()
        };
        let (text, _) = render("print", &config);
        assert_eq!(text, "PRINT print\n");
    }

    #[test]
    fn test_json_output() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        let (text, _) = render("\"hi\" 2.5", &config);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let tokens = value.as_array().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0]["type"], "STRING");
        assert_eq!(tokens[0]["literal"], "hi");
        assert_eq!(tokens[1]["type"], "NUMBER");
        assert_eq!(tokens[1]["literal"], 2.5);
        assert_eq!(tokens[2]["type"], "EOF");
        assert_eq!(tokens[2]["lexeme"], "");
    }

    #[test]
    fn test_errors_go_to_handler() {
        let (text, handler) = render("1 @ 2", &Config::default());
        assert_eq!(text, "NUMBER 1 1.0\nNUMBER 2 2.0\nEOF \n");
        assert_eq!(handler.error_count(), 1);

        let mut err = Vec::new();
        report_diagnostics(&handler, &mut err).unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "[line 1] Error: Unexpected character.\n"
        );
    }

    #[test]
    fn test_run_file_missing() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_file(
            Path::new("/nonexistent/input.lox"),
            &Config::default(),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(DrvError::ReadSource { .. })));
    }
}
