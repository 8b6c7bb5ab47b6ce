//! CLI argument definitions
//!
//! All Clap derive structs for `folio` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

/// Default location of the site content file.
pub const DEFAULT_CONFIG: &str = "content/site.yaml";

// ============================================================================
// Root CLI
// ============================================================================

/// Portfolio site renderer with per-card disclosures.
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "FOLIO_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human", global = true, env = "FOLIO_LOG_FORMAT")]
    pub log_format: LogFormatArg,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every page to static HTML files.
    Build(BuildArgs),

    /// Validate the content file without rendering.
    Validate(ValidateArgs),

    /// Render one page to stdout.
    Render(RenderArgs),

    /// Serve pages over HTTP with working disclosure toggles.
    Serve(ServeArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Content source shared by every command that loads the site.
#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// Path to the YAML content file.
    #[arg(short, long, default_value = DEFAULT_CONFIG, env = "FOLIO_CONFIG")]
    pub config: PathBuf,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Content source.
    #[command(flatten)]
    pub content: ContentArgs,

    /// Output directory.
    #[arg(short, long, default_value = "dist", env = "FOLIO_OUT_DIR")]
    pub out: PathBuf,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Content source.
    #[command(flatten)]
    pub content: ContentArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Content source.
    #[command(flatten)]
    pub content: ContentArgs,

    /// Slug of the page to render.
    pub slug: String,

    /// Expand the disclosure with this key (repeatable).
    #[arg(long = "open", value_name = "KEY")]
    pub open: Vec<String>,

    /// Output format.
    #[arg(short, long, default_value = "html")]
    pub format: RenderFormat,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Content source.
    #[command(flatten)]
    pub content: ContentArgs,

    /// Bind address as `[host:]port`.
    #[arg(long, default_value = "127.0.0.1:3000", env = "FOLIO_BIND")]
    pub bind: String,

    /// Expose Prometheus metrics on this port.
    #[arg(long, env = "FOLIO_METRICS_PORT")]
    pub metrics_port: Option<u16>,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Log format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable lines.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Human => Self::Human,
            LogFormatArg::Json => Self::Json,
        }
    }
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    /// Full HTML document.
    #[default]
    Html,
    /// Visual tree as JSON.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
