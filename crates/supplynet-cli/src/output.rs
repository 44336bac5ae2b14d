//! Shared output layer for pretty/text/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: pretty output for humans, compact text for pipes, or the
//! stable JSON report.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` / hidden `--json` flag
//! 2. `FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use supplynet_core::ErrorCode;
use supplynet_core::config::ConfigError;
use supplynet_core::input::InputError;

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<14} {}", format!("{key}:"), value.as_ref())
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (sections, visual framing).
    Pretty,
    /// Token-efficient plain text for pipes and scripts.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    if let Some(val) = format_env {
        match val.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value, fall through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from CLI flags, environment, and TTY defaults.
#[must_use]
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    let env_val = std::env::var("FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(format_flag, json_flag, env_val.as_deref(), is_tty)
}

/// Render a serializable value with explicit pretty/text renderers.
///
/// JSON mode writes the value itself, pretty-printed, followed by a newline.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_mode(&mut out, mode, value, text_fn, pretty_fn)
}

fn write_mode<T: Serialize>(
    out: &mut dyn Write,
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, out)?,
        OutputMode::Pretty => pretty_fn(value, out)?,
    }
    Ok(())
}

/// A structured error with optional suggestion and error code.
///
/// Command handlers return these through `anyhow`; `main` downcasts and
/// renders them once, in the active output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable error code (e.g. "E1003").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// Create a simple error with just a message.
    #[cfg(test)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            error_code: None,
        }
    }

    /// Create an error carrying the hint and code of `code`.
    pub fn coded(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            suggestion: code.hint().map(str::to_string),
            error_code: Some(code.code().to_string()),
        }
    }
}

impl From<&InputError> for CliError {
    fn from(err: &InputError) -> Self {
        Self::coded(err.to_string(), err.error_code())
    }
}

impl From<&ConfigError> for CliError {
    fn from(err: &ConfigError) -> Self {
        Self::coded(err.to_string(), err.error_code())
    }
}

/// Turn any command failure into the structured error that gets rendered.
///
/// Errors that are not already a [`CliError`] keep their full context chain
/// and are reported as unexpected.
#[must_use]
pub fn to_cli_error(err: &anyhow::Error) -> CliError {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.clone();
    }
    if let Some(input) = err.downcast_ref::<InputError>() {
        return input.into();
    }
    if let Some(config) = err.downcast_ref::<ConfigError>() {
        return config.into();
    }
    CliError::coded(format!("{err:#}"), ErrorCode::InternalUnexpected)
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_error(&mut out, mode, error)
}

fn write_error(out: &mut dyn Write, mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({
                "error": error,
            });
            serde_json::to_writer_pretty(&mut *out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn captured(f: impl FnOnce(&mut dyn Write) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write");
        String::from_utf8(buf).expect("utf8")
    }

    // ── resolve_output_mode_inner ───────────────────────────────────────────

    #[test]
    fn resolve_format_flag_wins_over_json_and_env() {
        let mode = resolve_output_mode_inner(Some(OutputMode::Text), true, Some("pretty"), true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn resolve_json_flag_wins_over_env() {
        let mode = resolve_output_mode_inner(None, true, Some("pretty"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn resolve_format_env_values() {
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("json"), false),
            OutputMode::Json
        );
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("pretty"), false),
            OutputMode::Pretty
        );
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("TEXT"), true),
            OutputMode::Text
        );
    }

    #[test]
    fn resolve_format_env_unknown_falls_through_to_tty() {
        let mode_tty = resolve_output_mode_inner(None, false, Some("fancy"), true);
        assert_eq!(mode_tty, OutputMode::Pretty);
        let mode_pipe = resolve_output_mode_inner(None, false, Some("fancy"), false);
        assert_eq!(mode_pipe, OutputMode::Text);
    }

    #[test]
    fn resolve_default_depends_on_tty() {
        assert_eq!(resolve_output_mode_inner(None, false, None, true), OutputMode::Pretty);
        assert_eq!(resolve_output_mode_inner(None, false, None, false), OutputMode::Text);
    }

    // ── render ──────────────────────────────────────────────────────────────

    #[derive(Serialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn write_mode_dispatches_per_mode() {
        let sample = Sample { name: "x".into() };
        let text = captured(|w| {
            write_mode(w, OutputMode::Text, &sample, |s, w| writeln!(w, "t {}", s.name), |_, _| {
                Ok(())
            })
        });
        assert_eq!(text, "t x\n");

        let pretty = captured(|w| {
            write_mode(w, OutputMode::Pretty, &sample, |_, _| Ok(()), |s, w| {
                writeln!(w, "p {}", s.name)
            })
        });
        assert_eq!(pretty, "p x\n");

        let json = captured(|w| {
            write_mode(w, OutputMode::Json, &sample, |_, _| Ok(()), |_, _| Ok(()))
        });
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["name"], "x");
    }

    // ── errors ──────────────────────────────────────────────────────────────

    #[test]
    fn input_error_maps_to_code_and_hint() {
        let err = CliError::from(&InputError::InvalidRelationship { index: 2 });
        assert!(err.message.contains("index 2"));
        assert_eq!(err.error_code.as_deref(), Some("E1003"));
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn config_error_maps_to_code() {
        let err = CliError::from(&ConfigError::Invalid("max_score must be 1..=100".into()));
        assert_eq!(err.error_code.as_deref(), Some("E2002"));
    }

    #[test]
    fn to_cli_error_downcasts_domain_errors() {
        let err = anyhow::Error::new(InputError::NotAnArray);
        assert_eq!(to_cli_error(&err).error_code.as_deref(), Some("E1002"));

        let err = anyhow::Error::new(CliError::new("plain"));
        assert_eq!(to_cli_error(&err), CliError::new("plain"));
    }

    #[test]
    fn to_cli_error_keeps_context_for_unexpected_errors() {
        let err = anyhow::anyhow!("disk on fire").context("reading input");
        let cli = to_cli_error(&err);
        assert_eq!(cli.message, "reading input: disk on fire");
        assert_eq!(cli.error_code.as_deref(), Some("E9001"));
    }

    #[test]
    fn config_read_error_keeps_path() {
        let err = ConfigError::Read {
            path: PathBuf::from("/nope/config.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let cli = CliError::from(&err);
        assert!(cli.message.contains("/nope/config.toml"));
        assert_eq!(cli.error_code.as_deref(), Some("E2001"));
    }

    #[test]
    fn json_error_is_wrapped() {
        let err = CliError::coded("bad input", ErrorCode::InvalidInput);
        let out = captured(|w| write_error(w, OutputMode::Json, &err));
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["error"]["message"], "bad input");
        assert_eq!(value["error"]["error_code"], "E1002");
        assert!(value["error"]["suggestion"].is_string());
    }

    #[test]
    fn human_error_has_suggestion_line() {
        let err = CliError::coded("bad input", ErrorCode::InvalidInput);
        let out = captured(|w| write_error(w, OutputMode::Text, &err));
        assert!(out.starts_with("error: bad input\n"));
        assert!(out.contains("  suggestion: "));

        let bare = captured(|w| write_error(w, OutputMode::Pretty, &CliError::new("oops")));
        assert_eq!(bare, "error: oops\n");
    }

    #[test]
    fn pretty_helpers_format_lines() {
        let out = captured(|w| {
            pretty_section(w, "Heading")?;
            pretty_kv(w, "nodes", "3")?;
            Ok(())
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Heading");
        assert_eq!(lines[1].len(), PRETTY_RULE_WIDTH);
        assert_eq!(lines[2], "nodes:         3");
    }
}
