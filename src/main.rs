//! Wordle Assets - CLI
//!
//! Regenerates the word list and word frequency assets of the browser game.
//! Every successful run prints a JSON record on stdout.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordle_assets::{
    commands::{
        CheckConfig, FrequencyConfig, MergeConfig, run_check, run_frequency, run_merge,
    },
    core::DEFAULT_LENGTH,
    frequency::DEFAULT_LANG,
    output::{print_check_report, print_check_summary, print_summary},
    wordlists::DEFAULT_DICTIONARY_PATH,
};

#[derive(Parser)]
#[command(
    name = "wordle_assets",
    about = "Regenerates the word list and word frequency assets of a Wordle game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Game directory holding src/wordlist.js and src/modern_word_frequency.js
    #[arg(long, global = true, default_value = "app")]
    app_dir: PathBuf,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Union the word list with a system dictionary
    Merge {
        /// Input word list (default: <app-dir>/src/wordlist.js)
        #[arg(long = "in")]
        input: Option<PathBuf>,

        /// Output word list (default: overwrite input)
        #[arg(long = "out")]
        output: Option<PathBuf>,

        /// Dictionary to merge; a missing file merges nothing
        #[arg(long = "dict", default_value = DEFAULT_DICTIONARY_PATH)]
        dictionary: PathBuf,

        /// Skip the dictionary entirely
        #[arg(long, conflicts_with = "dictionary")]
        no_dict: bool,

        /// Word length to accept from the dictionary
        #[arg(short, long, default_value_t = DEFAULT_LENGTH, value_parser = parse_length)]
        length: usize,

        /// Write only the list, without the browser registration block
        #[arg(long)]
        data_only: bool,
    },

    /// Rebuild the word frequency table from the word list
    Frequency {
        /// Word list to score (default: <app-dir>/src/wordlist.js)
        #[arg(long)]
        wordlist: Option<PathBuf>,

        /// Output table (default: <app-dir>/src/modern_word_frequency.js)
        #[arg(long = "out")]
        output: Option<PathBuf>,

        /// Unigram counts file, one `word count` pair per line
        #[arg(long)]
        corpus: PathBuf,

        /// Language to score the words in
        #[arg(long, default_value = DEFAULT_LANG)]
        lang: String,

        /// Language of a corpus that has no `# lang:` header line
        #[arg(long, default_value = DEFAULT_LANG)]
        corpus_lang: String,
    },

    /// Validate the generated assets
    Check {
        /// Word list to check (default: <app-dir>/src/wordlist.js)
        #[arg(long)]
        wordlist: Option<PathBuf>,

        /// Frequency table to compare against the word list
        #[arg(long)]
        frequency: Option<PathBuf>,

        /// Guess pool asset (`const GUESS_LIST = [...]`) the page loads first
        #[arg(long)]
        guesses: Option<PathBuf>,

        /// Expected word length
        #[arg(short, long, default_value_t = DEFAULT_LENGTH, value_parser = parse_length)]
        length: usize,
    },
}

fn parse_length(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("word length must be at least 1".to_string()),
        Ok(length) => Ok(length),
        Err(e) => Err(e.to_string()),
    }
}

fn default_wordlist(app_dir: &Path) -> PathBuf {
    app_dir.join("src").join("wordlist.js")
}

fn default_frequency_table(app_dir: &Path) -> PathBuf {
    app_dir.join("src").join("modern_word_frequency.js")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Merge {
            input,
            output,
            dictionary,
            no_dict,
            length,
            data_only,
        } => {
            let input = input.unwrap_or_else(|| default_wordlist(&cli.app_dir));
            let config = MergeConfig {
                output: output.unwrap_or_else(|| input.clone()),
                input,
                dictionary: (!no_dict).then_some(dictionary),
                length,
                registration: !data_only,
            };
            run_merge_command(&config)
        }
        Commands::Frequency {
            wordlist,
            output,
            corpus,
            lang,
            corpus_lang,
        } => {
            let mut config = FrequencyConfig::new(
                wordlist.unwrap_or_else(|| default_wordlist(&cli.app_dir)),
                output.unwrap_or_else(|| default_frequency_table(&cli.app_dir)),
                corpus,
            );
            config.lang = lang;
            config.corpus_lang = corpus_lang;
            run_frequency_command(&config)
        }
        Commands::Check {
            wordlist,
            frequency,
            guesses,
            length,
        } => {
            let mut config =
                CheckConfig::new(wordlist.unwrap_or_else(|| default_wordlist(&cli.app_dir)));
            config.frequency = frequency;
            config.guesses = guesses;
            config.length = length;
            run_check_command(&config)
        }
    }
}

fn run_merge_command(config: &MergeConfig) -> Result<()> {
    let summary = run_merge(config)?;
    print_summary(&summary);
    Ok(())
}

fn run_frequency_command(config: &FrequencyConfig) -> Result<()> {
    let summary = run_frequency(config)?;
    print_summary(&summary);
    Ok(())
}

fn run_check_command(config: &CheckConfig) -> Result<()> {
    let report = run_check(config)?;
    print_check_report(&report);

    if !report.is_ok() {
        bail!(
            "{} problem(s) found in {}",
            report.findings.len(),
            report.wordlist.display()
        );
    }

    print_check_summary(&report);
    Ok(())
}
