//! Command-line interface for chatmark.

use chatmark_core::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Chatmark - parse streamed model output as a markdown subset.
///
/// Reads markdown from files or stdin and prints the parsed document.
/// With --stream the input is replayed line by line and the full document
/// is re-parsed and printed after every line, the way a chat client
/// re-renders a response while it is still arriving.
#[derive(Parser, Debug)]
#[command(
    name = "chatmark",
    author = "Chatmark Contributors",
    version,
    about = "A never-failing markdown-subset parser for streamed model responses",
    after_help = "Examples:\n  \
                  cat reply.md | chatmark\n  \
                  chatmark -f json reply.md\n  \
                  chatmark --stream -f ansi reply.md\n  \
                  chatmark -c '[parser]\\nCoalescePlain = false' reply.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Output format: tree, json, plain or ansi (default from config)
    #[arg(short = 'f', long = "format")]
    pub format: Option<OutputFormat>,

    /// Re-parse and print the document after every input line
    #[arg(long = "stream")]
    pub stream: bool,

    /// Keep every unmatched character as its own plain run
    #[arg(long = "no-coalesce")]
    pub no_coalesce: bool,

    /// Set the output width for rules (0 = auto-detect from terminal)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if missing and exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

impl Cli {
    /// Get the effective width (0 means auto-detect).
    pub fn effective_width(&self) -> usize {
        if self.width == 0 {
            crossterm::terminal::size()
                .map(|(cols, _)| cols as usize)
                .unwrap_or(80)
        } else {
            self.width as usize
        }
    }

    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use chatmark_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

/// Create the default config file if missing and print its path.
pub fn init_config() -> chatmark_core::Result<()> {
    let path = chatmark_config::Config::ensure_config_file()?;
    println!("{}", path.display());
    Ok(())
}
