//! Command-line interface for tesc.

use clap::Parser;
use tesc_core::{join_styles, Back, Face, Style};

/// tesc - Style console text with ANSI escape sequences.
///
/// Prints its arguments (or every line read from stdin) wrapped in the
/// requested colors and font style, followed by a reset.
#[derive(Parser, Debug)]
#[command(
    name = "tesc",
    author = "Tesc Contributors",
    version,
    about = "Style console text with ANSI escape sequences",
    after_help = "Colors: none, black, red, green, yellow, blue, magenta, cyan, white,\n\
                  and bright-<color> for each of them.\n\n\
                  Examples:\n  \
                  tesc -f red -B 'build failed'\n  \
                  tesc -f white -b blue --bright-back -u status\n  \
                  tesc -p warning 'disk almost full'\n  \
                  cat log.txt | tesc -f bright-black"
)]
pub struct Cli {
    /// Text to style (reads lines from stdin if not provided)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Start from a named preset (see --list-presets)
    #[arg(short = 'p', long = "preset", value_name = "NAME")]
    pub preset: Option<String>,

    /// Foreground color
    #[arg(short = 'f', long = "face", value_name = "COLOR")]
    pub face: Option<Face>,

    /// Background color
    #[arg(short = 'b', long = "back", value_name = "COLOR")]
    pub back: Option<Back>,

    /// Use the bright variant of the foreground color
    #[arg(long = "bright-face")]
    pub bright_face: bool,

    /// Use the bright variant of the background color
    #[arg(long = "bright-back")]
    pub bright_back: bool,

    /// Bold text
    #[arg(short = 'B', long = "bold")]
    pub bold: bool,

    /// Italic text
    #[arg(short = 'i', long = "italic")]
    pub italic: bool,

    /// Underlined text
    #[arg(short = 'u', long = "underline")]
    pub underline: bool,

    /// Do not print a trailing newline
    #[arg(short = 'n', long = "no-newline")]
    pub no_newline: bool,

    /// Do not reset the style after the text
    #[arg(long = "no-reset")]
    pub no_reset: bool,

    /// List the configured presets and exit
    #[arg(long = "list-presets")]
    pub list_presets: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.text.is_empty()
    }

    /// The font style requested by the individual flags.
    pub fn style_flags(&self) -> Style {
        let flags = [
            (self.bold, Style::BOLD),
            (self.italic, Style::ITALIC),
            (self.underline, Style::UNDERLINE),
        ];
        join_styles(flags.into_iter().filter(|(on, _)| *on).map(|(_, style)| style))
    }
}

/// Show paths information.
pub fn show_paths() {
    use tesc_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["tesc"]);
        assert!(cli.text.is_empty());
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.face, None);
        assert_eq!(cli.back, None);
        assert_eq!(cli.style_flags(), Style::NORMAL);
        assert!(!cli.no_reset);
    }

    #[test]
    fn test_cli_parse_text() {
        let cli = Cli::parse_from(["tesc", "hello", "world"]);
        assert_eq!(cli.text, vec!["hello", "world"]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_colors() {
        let cli = Cli::parse_from(["tesc", "-f", "red", "--back", "bright-blue", "x"]);
        assert_eq!(cli.face, Some(Face::Red));
        assert_eq!(cli.back, Some(Back::BrightBlue));
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["tesc", "-f", "purple"]).is_err());
    }

    #[test]
    fn test_cli_style_flags() {
        let cli = Cli::parse_from(["tesc", "-B", "-u"]);
        assert_eq!(cli.style_flags(), Style::BOLD | Style::UNDERLINE);

        let cli = Cli::parse_from(["tesc", "--italic"]);
        assert_eq!(cli.style_flags(), Style::ITALIC);
    }

    #[test]
    fn test_cli_parse_options() {
        let cli = Cli::parse_from([
            "tesc",
            "-p", "error",
            "-l", "debug",
            "--bright-face",
            "-n",
            "--no-reset",
        ]);
        assert_eq!(cli.preset.as_deref(), Some("error"));
        assert_eq!(cli.log_level, "debug");
        assert!(cli.bright_face);
        assert!(!cli.bright_back);
        assert!(cli.no_newline);
        assert!(cli.no_reset);
        assert!(cli.should_read_stdin());
    }
}
