//! Command-line interface for ptx.

use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use parsedtext_config::RuleConfig;
use std::path::PathBuf;

/// Output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Text with `{{TOKEN-i-n}}` markers
    Marked,
    /// Marker text and token map as JSON
    Json,
    /// Indented display tree
    Tree,
    /// Reconstructed text with highlighted tokens
    Ansi,
    /// Reconstructed text without escapes
    Plain,
}

/// ptx - find and highlight patterns in text.
///
/// Rules are applied in priority order: rules from the config file first,
/// then `--type` rules, then `--pattern` rules. Text claimed by an earlier
/// rule is still searched by later ones, so tokens nest.
#[derive(Parser, Debug)]
#[command(
    name = "ptx",
    version,
    about = "Priority-ordered, nesting regex tokenizer",
    after_help = "Examples:\n  \
                  ptx -t url -t email notes.txt\n  \
                  echo 'ping @ann' | ptx -p '@\\w+' -f json\n  \
                  ptx --no-config -p '\\[[^]]*\\]' -p '@\\w+' -f tree chat.log"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Add a rule using a named pattern (url, phone, email, or a config pattern)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Add a rule using a raw regex
    #[arg(short = 'p', long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,

    /// Match --pattern regexes case-insensitively
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Ignore the config file in the platform config directory
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// Output format (default: ansi on a terminal, plain otherwise)
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Print the effective configuration as TOML and exit
    #[arg(long = "dump-config")]
    pub dump_config: bool,

    /// Write the default config file if it does not exist, then exit
    #[arg(long = "init-config")]
    pub init_config: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Rules given on the command line, in application order.
    pub fn rules(&self) -> Vec<RuleConfig> {
        let types = self.types.iter().map(RuleConfig::of_type);
        let patterns = self.patterns.iter().map(|p| RuleConfig {
            case_insensitive: self.ignore_case,
            ..RuleConfig::of_pattern(p)
        });
        types.chain(patterns).collect()
    }

    /// The output format, picking one from the terminal if unset.
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_else(|| {
            if std::io::stdout().is_tty() {
                OutputFormat::Ansi
            } else {
                OutputFormat::Plain
            }
        })
    }

    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use parsedtext_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());
    let exists = Config::config_path().is_some_and(|p| p.exists());

    println!("paths:");
    println!(
        "  config                {}{}",
        config_path,
        if exists { "" } else { " (missing, using defaults)" }
    );
}
