//! Chatmark - parse streamed model output as a markdown subset.
//!
//! This binary provides the CLI interface to the chatmark library,
//! reading from files or stdin and optionally replaying the input as a
//! stream of growing prefixes.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use chatmark_config::Config;
use chatmark_core::{OutputFormat, Result};
use chatmark_parser::{Parser as MarkdownParser, StreamBuffer};
use chatmark_render::Renderer;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Chatmark v{}", env!("CARGO_PKG_VERSION"));

    let result = if cli.init_config {
        cli::init_config()
    } else {
        run(&cli)
    };

    if let Err(e) = result {
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

/// How input is turned into output, resolved from CLI and config.
#[derive(Debug, Clone, Copy)]
struct RunSettings {
    parser: MarkdownParser,
    format: OutputFormat,
    stream: bool,
    stream_separator: bool,
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let settings = create_settings(cli, &config);
    debug!("Run settings: {:?}", settings);

    let stdout = io::stdout();
    let mut renderer = Renderer::new(stdout.lock(), cli.effective_width());
    renderer.set_compact_json(settings.stream);

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let stdin = io::stdin();
        process_input(stdin.lock(), &settings, &mut renderer)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let file = File::open(path)?;
            process_input(BufReader::new(file), &settings, &mut renderer)?;
        }
    }

    renderer.flush()
}

/// Load configuration with an optional override.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if let Some(ref config_arg) = cli.config {
        config.apply_override(config_arg)?;
        debug!("Merged config override");
    }

    Ok(config)
}

/// Combine CLI flags with configuration; flags win.
fn create_settings(cli: &Cli, config: &Config) -> RunSettings {
    let mut parser = MarkdownParser::new();
    parser.set_coalesce_plain(config.parser.coalesce_plain && !cli.no_coalesce);

    RunSettings {
        parser,
        format: cli.format.unwrap_or(config.output.format),
        stream: cli.stream,
        stream_separator: config.output.stream_separator,
    }
}

/// Parse one input and write it through the renderer.
///
/// In stream mode every line, line ending included, is appended to a
/// [`StreamBuffer`] and the whole accumulated text is re-parsed and written
/// after each line, so the last update is the same document a one-shot
/// parse gives. Otherwise the input is read completely and parsed once.
fn process_input<R: BufRead, W: Write>(
    mut reader: R,
    settings: &RunSettings,
    renderer: &mut Renderer<W>,
) -> Result<()> {
    if !settings.stream {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let document = settings.parser.parse(&text);
        debug!("Parsed {} bytes into {} blocks", text.len(), document.len());
        return renderer.render(&document, settings.format);
    }

    let mut buffer = StreamBuffer::with_parser(settings.parser);
    let mut updates = 0usize;

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        trace!("Input line: {:?}", line);
        buffer.push(&line);

        if updates > 0 && settings.stream_separator {
            renderer.render_separator(settings.format)?;
        }
        renderer.render(&buffer.snapshot(), settings.format)?;
        renderer.flush()?;
        updates += 1;
    }

    debug!("Streamed {} updates ({} bytes)", updates, buffer.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings(format: OutputFormat, stream: bool) -> RunSettings {
        RunSettings {
            parser: MarkdownParser::new(),
            format,
            stream,
            stream_separator: true,
        }
    }

    fn run_to_string(input: &str, settings: &RunSettings) -> String {
        let mut output = Vec::new();
        {
            let mut renderer = Renderer::new(&mut output, 4);
            renderer.set_compact_json(settings.stream);
            process_input(Cursor::new(input), settings, &mut renderer).unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_create_settings_defaults() {
        let cli = Cli::parse_from(["chatmark"]);
        let settings = create_settings(&cli, &Config::default());

        assert_eq!(settings.format, OutputFormat::Tree);
        assert!(settings.parser.options().inline.coalesce_plain);
        assert!(!settings.stream);
        assert!(settings.stream_separator);
    }

    #[test]
    fn test_create_settings_flags_override_config() {
        let cli = Cli::parse_from(["chatmark", "-f", "plain", "--no-coalesce", "--stream"]);
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        let settings = create_settings(&cli, &config);

        assert_eq!(settings.format, OutputFormat::Plain);
        assert!(!settings.parser.options().inline.coalesce_plain);
        assert!(settings.stream);
    }

    #[test]
    fn test_create_settings_format_from_config() {
        let cli = Cli::parse_from(["chatmark"]);
        let mut config = Config::default();
        config.output.format = OutputFormat::Ansi;
        config.parser.coalesce_plain = false;
        let settings = create_settings(&cli, &config);

        assert_eq!(settings.format, OutputFormat::Ansi);
        assert!(!settings.parser.options().inline.coalesce_plain);
    }

    #[test]
    fn test_process_whole_input() {
        let out = run_to_string("# Hi\n**x** y", &settings(OutputFormat::Tree, false));
        assert_eq!(out, "heading(1) plain(\"Hi\")\nparagraph bold(\"x\") plain(\" y\")\n");
    }

    #[test]
    fn test_process_streamed_input() {
        let out = run_to_string("**a\nb**", &settings(OutputFormat::Plain, true));
        assert_eq!(out, "**a\n\n────\na b\n");
    }

    #[test]
    fn test_process_streamed_json_one_document_per_line() {
        let out = run_to_string("- a\n- b\n- c", &settings(OutputFormat::Json, true));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("bullet_item"));
    }

    #[test]
    fn test_last_streamed_update_matches_whole_input() {
        for input in ["a\n", "# T\r\n\n- x\n", "```\ncode\n```\n", "no newline"] {
            let whole = run_to_string(input, &settings(OutputFormat::Tree, false));
            let mut streamed = settings(OutputFormat::Tree, true);
            streamed.stream_separator = false;
            let updates = run_to_string(input, &streamed);
            assert!(
                updates.ends_with(&whole),
                "{:?}: streamed {:?}, whole {:?}",
                input,
                updates,
                whole
            );
        }
        assert_eq!(
            run_to_string("a\n", &settings(OutputFormat::Tree, true)),
            "paragraph plain(\"a\")\nblank_marker\n"
        );
    }

    #[test]
    fn test_process_empty_input() {
        assert_eq!(run_to_string("", &settings(OutputFormat::Tree, false)), "");
        assert_eq!(run_to_string("", &settings(OutputFormat::Tree, true)), "");
    }
}
