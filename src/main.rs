//! tesc - ANSI escape based console text stylizer.
//!
//! This binary provides the CLI interface to the tesc libraries,
//! styling its arguments or every line read from stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::io::{self, BufRead, Write};

use tesc_ansi::{Color, Font, Reset, StyleState};
use tesc_config::Config;
use tesc_core::{BrightPolicy, Brighten, Result};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("tesc v{}", env!("CARGO_PKG_VERSION"));

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
    let config = load_config(cli)?;
    debug!("Brightness policy: {}", config.policy());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_presets {
        list_presets(&config, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let mut state = StyleState::new();
    let line_style = resolve_style(cli, &config, &mut state)?;
    debug!("Resolved style: {:?}", state);

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        for line in io::stdin().lock().lines() {
            let line = line?;
            trace!("Input line: {}", line);
            line_style.write_line(&mut out, &line)?;
            out.flush()?;
        }
    } else {
        line_style.write_line(&mut out, &cli.text.join(" "))?;
    }

    out.flush()?;
    Ok(())
}

/// Load configuration, applying the `--config` override if present.
///
/// A broken user config file falls back to the defaults. A broken explicit
/// override is still an error.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = base_config(Config::load());
    if let Some(ref config_arg) = cli.config {
        config.apply_override(config_arg)?;
        debug!("Merged config override: {}", config_arg);
    }
    Ok(config)
}

fn base_config(loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|e| {
        error!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

/// How each output line is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineStyle {
    /// Emitted only if at least one channel is set
    color: Option<Color>,
    font: Font,
    reset: bool,
    newline: bool,
}

impl LineStyle {
    fn write_line<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if let Some(color) = self.color {
            color.write_to(out)?;
        }
        self.font.write_to(out)?;
        out.write_all(text.as_bytes())?;
        if self.reset {
            write!(out, "{}", Reset)?;
        }
        if self.newline {
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Build the line style from the preset and the explicit flags.
///
/// The preset is applied first; `--face`/`--back` then replace its
/// channels, the bright flags brighten whatever channel results, and the
/// style flags are joined onto the preset style.
fn resolve_style(cli: &Cli, config: &Config, state: &mut StyleState) -> Result<LineStyle> {
    let policy = config.policy();

    if let Some(ref name) = cli.preset {
        let preset = config.preset(name)?;
        debug!("Applying preset {}: {:?}", name, preset);
        preset.apply(state);
    }

    if let Some(face) = cli.face {
        state.color(face);
    }
    if let Some(back) = cli.back {
        state.color(back);
    }

    if cli.bright_face {
        let face = brighten(state.face(), policy)?;
        state.color(face);
    }
    if cli.bright_back {
        let back = brighten(state.back(), policy)?;
        state.color(back);
    }

    let flags = cli.style_flags();
    if !flags.is_empty() {
        state.font(state.style() | flags);
    }

    let color = state.current_color();
    Ok(LineStyle {
        color: (!color.is_empty()).then_some(color),
        font: state.current_font(),
        reset: !cli.no_reset,
        newline: !cli.no_newline,
    })
}

fn brighten<C: Brighten + std::fmt::Display>(color: C, policy: BrightPolicy) -> Result<C> {
    let bright = color.brighten(policy)?;
    trace!("Brightened {} to {} ({} policy)", color, bright, policy);
    Ok(bright)
}

/// Print every preset, styled as itself.
fn list_presets<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    for name in config.preset_names() {
        if let Ok(preset) = config.preset(name) {
            writeln!(
                out,
                "{}{}{:<12}{}  face={} back={} style={}",
                preset.color(),
                preset.font(),
                name,
                Reset,
                preset.face,
                preset.back,
                preset.style
            )?;
        }
    }
    Ok(())
}
