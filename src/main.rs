//! ptx - find and highlight patterns in text.
//!
//! This binary provides the CLI interface to the parsedtext library. Input
//! comes from files or stdin; each input is tokenized as a whole and written
//! in the selected output format.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use log::{debug, error, info, warn, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};

use parsedtext_config::{resolve_rules, Config};
use parsedtext_core::{ParseResult, ParsedTextError, Result};
use parsedtext_parser::{parse, PatternDescriptor};
use parsedtext_render::{outline, RenderStyle, Renderer};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("ptx v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    if cli.init_config {
        let path = Config::ensure_config_file()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(cli)?;

    if cli.dump_config {
        let toml_string = toml::to_string_pretty(&config)
            .map_err(|e| ParsedTextError::config(format!("Serialization error: {}", e)))?;
        print!("{}", toml_string);
        return Ok(());
    }

    let patterns = build_patterns(cli, &config)?;
    if patterns.is_empty() {
        warn!("no rules configured, input is passed through unchanged");
    }

    let format = cli.effective_format();
    let style = RenderStyle::from_config(&config.style);
    debug!("format {:?}, {} rule(s)", format, patterns.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        emit(&mut out, &parse(&text, &patterns), format, &style)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let text = fs::read_to_string(path)?;
            emit(&mut out, &parse(&text, &patterns), format, &style)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load configuration, honoring `--no-config` and `--config`.
fn load_config(cli: &Cli) -> Result<Config> {
    if !cli.no_config {
        return Config::load_with_override(cli.config.as_deref());
    }

    let mut config = Config::empty();
    if let Some(config_arg) = cli.config.as_deref() {
        let path = std::path::Path::new(config_arg);
        let override_config = if path.exists() {
            Config::load_from(path)?
        } else {
            Config::from_toml(config_arg)?
        };
        config.merge(&override_config);
        debug!("Merged config override");
    }
    Ok(config)
}

/// Config rules followed by command-line rules, resolved to descriptors.
fn build_patterns(cli: &Cli, config: &Config) -> Result<Vec<PatternDescriptor>> {
    let mut rules = config.rules.clone();
    rules.extend(cli.rules());
    resolve_rules(&rules, &config.registry()?)
}

/// Write one parse result in `format`.
fn emit<W: Write>(
    out: &mut W,
    result: &ParseResult,
    format: OutputFormat,
    style: &RenderStyle,
) -> io::Result<()> {
    match format {
        OutputFormat::Marked => write!(out, "{}", result.text),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)
        }
        OutputFormat::Tree => write!(out, "{}", outline(result)),
        OutputFormat::Ansi => Renderer::with_style(&mut *out, style.clone()).render(result),
        OutputFormat::Plain => Renderer::plain(&mut *out).render(result),
    }
}
