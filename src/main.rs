// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use cineglot::app_config::{self, Config};
use cineglot::app_controller::Controller;
use cineglot::file_utils::FileManager;
use cineglot::subtitle_processor::SubtitleLine;
use cineglot::vocab::{self, VocabItem};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the learnable lines of a script
    Lines {
        /// Bilingual .ass script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the words of a script that are not in the known-word list
    Unknown {
        /// Bilingual .ass script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show the full sentence a line belongs to
    Context {
        /// Bilingual .ass script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Line index (0-based)
        #[arg(short = 'n', long)]
        line: usize,

        /// Lines scanned on each side (overrides config)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Capture words from a line and print the study-guide request
    Prompt {
        /// Bilingual .ass script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Line index (0-based)
        #[arg(short = 'n', long)]
        line: usize,

        /// Word index within the line (repeatable)
        #[arg(short, long = "word", required = true)]
        words: Vec<usize>,
    },

    /// Summarize every script under a directory
    Scan {
        /// Directory to search for .ass / .ssa files
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Generate shell completions for cineglot
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// cineglot - learn a language from bilingual movie subtitles
///
/// Reads dual-language .ass scripts, highlights the words you don't know yet
/// and rebuilds the full sentences they appear in.
#[derive(Parser, Debug)]
#[command(name = "cineglot")]
#[command(version)]
#[command(about = "Vocabulary study from bilingual subtitles")]
#[command(long_about = "cineglot parses bilingual .ass scripts and helps you study their vocabulary.

EXAMPLES:
    cineglot lines movie.ass                      # Print learnable lines
    cineglot --vocab known.txt unknown movie.ass  # Words not in your list
    cineglot context movie.ass -n 42              # Full sentence around line 42
    cineglot prompt movie.ass -n 42 -w 3 -w 5     # Study-guide request for two words
    cineglot scan ~/movies                        # Summarize a folder of scripts
    cineglot completions bash > cineglot.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in cineglot.json by default. You can specify a
    different config file with --config-path. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "cineglot.json")]
    config_path: String,

    /// Newline-delimited known-word list (overrides config)
    #[arg(long, global = true, env = "CINEGLOT_VOCAB")]
    vocab: Option<PathBuf>,

    /// Language being learned (e.g., 'en')
    #[arg(short, long, global = true)]
    target_language: Option<String>,

    /// Language of the reference translation (e.g., 'zh')
    #[arg(short, long, global = true)]
    reference_language: Option<String>,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level), now, Self::get_emoji_for_level(level), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize with trace so the config can lower the effective level later
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "cineglot", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    run_command(&controller, cli.command)
}

// @returns: Config file merged with command line overrides, validated
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(target_language) = &cli.target_language {
        config.target_language = target_language.clone();
    }

    if let Some(reference_language) = &cli.reference_language {
        config.reference_language = reference_language.clone();
    }

    if let Some(vocab) = &cli.vocab {
        config.known_words_path = Some(vocab.clone());
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Commands::Context { max_depth: Some(depth), .. } = &cli.command {
        config.learning.max_context_depth = *depth;
    }

    config.validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn run_command(controller: &Controller, command: Commands) -> Result<()> {
    match command {
        Commands::Lines { script, json } => {
            let script = controller.load_script(&script)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&script.lines)?);
            } else {
                for line in &script.lines {
                    println!("{:>5} {}", line.seq_num, line);
                }
            }
        }
        Commands::Unknown { script, json } => {
            if controller.known_words().is_empty() {
                return Err(anyhow!("No known-word list loaded. Use --vocab or set known_words_path in the config."));
            }

            let script = controller.load_script(&script)?;
            let unknown = controller.unknown_words(&script.lines);
            if json {
                println!("{}", serde_json::to_string_pretty(&unknown)?);
            } else {
                for entry in &unknown {
                    let words: Vec<&str> = entry.words.iter().map(|(_, w)| *w).collect();
                    println!("{:>5} [{}] {}", entry.line_index, script.lines[entry.line_index].display_time(), words.join(" "));
                }
            }
            info!("{} line(s) with unknown words", unknown.len());
        }
        Commands::Context { script, line, .. } => {
            let script = controller.load_script(&script)?;
            let window = controller
                .window_for(&script.lines, line)
                .ok_or_else(|| anyhow!("Line {} is out of range (script has {} lines)", line, script.len()))?;

            let (start, end) = window.span();
            let context = window.context();
            println!("Lines {}..={}", start, end);
            println!("{}", context.target_text);
            if !context.reference_text.is_empty() {
                println!("{}", context.reference_text);
            }
        }
        Commands::Prompt { script, line, words } => {
            let script = controller.load_script(&script)?;
            let items = capture_words(controller, &script.lines, line, &words);
            for group in vocab::group_by_line(&items) {
                info!("[{}] {}: {}", group.timestamp, group.line_id, group.words.join(", "));
            }

            let request = controller
                .study_guide_request(&items)
                .ok_or_else(|| anyhow!("No words captured from line {}", line))?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Scan { dir } => {
            if !FileManager::dir_exists(&dir) {
                return Err(anyhow!("Input path is not a directory: {:?}", dir));
            }

            let summaries = controller.scan_folder(&dir)?;
            for summary in &summaries {
                println!("{:>6} lines {:>6} unknown  {}", summary.lines, summary.unknown_words, summary.path.display());
            }
            info!("Finished processing {} files", summaries.len());
        }
        Commands::Completions { .. } => unreachable!("handled before config is loaded"),
    }

    Ok(())
}

// @returns: Captured items for the valid word positions of a line
fn capture_words(controller: &Controller, lines: &[SubtitleLine], line: usize, words: &[usize]) -> Vec<VocabItem> {
    words
        .iter()
        .filter_map(|&word_index| {
            let item = controller.capture(lines, line, word_index);
            if item.is_none() {
                log::warn!("Nothing to capture at line {}, word {}", line, word_index);
            }
            item
        })
        .collect()
}
