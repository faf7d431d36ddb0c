use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use seedroll::io_utils::{io_cli_error, seedroll_cli_error, simple_cli_error};
use seedroll::{
    init_logging, App, Config, RollTally, WordReport, WordlistService, CANONICAL_ENGLISH_SHA256,
};
use tracing::info;

/// Turn dice or card rolls into BIP39 English words and back.
#[derive(Parser)]
#[command(name = "seedroll", version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the word at a zero-based index
    Word {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Print the word for a single roll sum
    Roll {
        #[arg(allow_negative_numbers = true)]
        sum: i64,
    },
    /// Add up individual roll values and print the word they select
    Tally {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Show the index, sum and roll values for a word
    Verify { word: String },
    /// Run the roll-value and index checks on a number
    Check {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Write the index,sum,word lookup table as CSV
    Table {
        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the word count and fingerprint of the embedded list
    Info,
    /// Print a greeting
    Greet { name: String },
}

#[derive(Serialize)]
struct TallySummary<'a> {
    values: Vec<i64>,
    sum: i64,
    index: i64,
    word: &'a str,
}

#[derive(Serialize)]
struct CheckSummary {
    number: i64,
    valid_roll: bool,
    index: i64,
    valid_index: bool,
}

#[derive(Serialize)]
struct InfoSummary {
    words: usize,
    fingerprint: String,
    canonical: bool,
}

#[derive(Serialize)]
struct Greeting {
    greeting: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = Config {
        log_level: cli.log_level,
        json_output: cli.json,
    };
    init_logging(&config).map_err(|e| simple_cli_error(&e))?;

    let service = WordlistService::new();
    let app = App::with_service(&service);

    match cli.command {
        Command::Word { index } => {
            let report = service
                .report(index)
                .map_err(|e| seedroll_cli_error("word lookup failed", e))?;
            emit(&config, &report, || report.word.clone())
        }
        Command::Roll { sum } => {
            let report = service
                .roll_report(sum)
                .map_err(|e| seedroll_cli_error("roll lookup failed", e))?;
            emit(&config, &report, || report.word.clone())
        }
        Command::Tally { values } => {
            let tally = RollTally::from_values(values)
                .map_err(|e| seedroll_cli_error("invalid tally", e))?;
            let word = service
                .tally_to_word(&tally)
                .map_err(|e| seedroll_cli_error("tally lookup failed", e))?;
            let summary = TallySummary {
                values: tally.values().collect(),
                sum: tally.sum(),
                index: tally.index(),
                word,
            };
            emit(&config, &summary, || word.to_string())
        }
        Command::Verify { word } => {
            let report = service
                .verify_word(&word)
                .map_err(|e| seedroll_cli_error("verification failed", e))?;
            emit(&config, &report, || describe(&report))
        }
        Command::Check { number } => {
            let index = app.calculate_word_index(number);
            let summary = CheckSummary {
                number,
                valid_roll: app.is_valid_number(number),
                index,
                valid_index: app.validate_word_index(index),
            };
            emit(&config, &summary, || {
                format!(
                    "roll value valid: {}\nindex: {}\nindex valid: {}",
                    summary.valid_roll, summary.index, summary.valid_index
                )
            })
        }
        Command::Table { output } => {
            let list = service
                .wordlist()
                .map_err(|e| seedroll_cli_error("loading wordlist", e))?;
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .map_err(|e| io_cli_error("creating output file", &path, e))?;
                    list.write_csv(BufWriter::new(file))
                        .map_err(|e| seedroll_cli_error("writing lookup table", e))?;
                    info!(path = %path.display(), "lookup table written");
                }
                None => list
                    .write_csv(io::stdout().lock())
                    .map_err(|e| seedroll_cli_error("writing lookup table", e))?,
            }
            Ok(())
        }
        Command::Info => {
            let list = service
                .wordlist()
                .map_err(|e| seedroll_cli_error("loading wordlist", e))?;
            let fingerprint = list.fingerprint();
            let summary = InfoSummary {
                words: list.len(),
                canonical: fingerprint == CANONICAL_ENGLISH_SHA256,
                fingerprint,
            };
            emit(&config, &summary, || {
                format!(
                    "words: {}\nsha256: {}\ncanonical: {}",
                    summary.words, summary.fingerprint, summary.canonical
                )
            })
        }
        Command::Greet { name } => {
            let greeting = Greeting {
                greeting: app.greet(&name),
            };
            emit(&config, &greeting, || greeting.greeting.clone())
        }
    }
}

fn describe(report: &WordReport) -> String {
    let rolls = if report.rolls.is_empty() {
        "none (sum exceeds 2047)".to_string()
    } else {
        report
            .rolls
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!(
        "word: {}\nindex: {}\nsum: {}\nrolls: {}",
        report.word, report.index, report.sum, rolls
    )
}

fn emit<T, F>(config: &Config, value: &T, text: F) -> Result<(), Box<dyn Error>>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if config.json_output {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}
