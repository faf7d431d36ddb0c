use clap::Parser;
use seedroll::{
    io_utils::{io_cli_error, seedroll_cli_error},
    Wordlist, CANONICAL_ENGLISH_SHA256,
};
use std::fs;
use std::path::PathBuf;

/// Validate a wordlist file and compare it to the canonical BIP39 English list.
#[derive(Parser)]
struct Args {
    /// Newline-delimited wordlist file
    input: PathBuf,
    /// Fail unless the file matches the canonical English list exactly
    #[arg(long)]
    strict: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let raw = fs::read_to_string(&args.input)
        .map_err(|e| io_cli_error("reading wordlist", &args.input, e))?;
    let list = Wordlist::parse(&raw).map_err(|e| seedroll_cli_error("invalid wordlist", e))?;
    let fingerprint = list.fingerprint();
    let canonical = fingerprint == CANONICAL_ENGLISH_SHA256;
    println!("words: {}", list.len());
    println!("sha256: {fingerprint}");
    println!("canonical: {canonical}");
    if args.strict && !canonical {
        return Err("wordlist differs from the canonical BIP39 English list".into());
    }
    Ok(())
}
