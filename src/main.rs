use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use finsift::{parse_message, parse_statement, MemorySink, TransactionSink};

/// Extract structured transactions from bank SMS dumps or OCR'd statement
/// text.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    /// File containing one SMS body per line, or raw statement text.
    input: PathBuf,

    /// Treat the input as OCR'd statement text instead of SMS lines.
    #[clap(long)]
    statement: bool,

    /// User the accepted records are filed under.
    #[clap(long, default_value = "local")]
    user: String,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    let text = match fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(error) => {
            eprintln!("{}: {error}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let records = if args.statement {
        parse_statement(&text)
    } else {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| parse_message(line).ok())
            .collect()
    };

    let mut sink = MemorySink::new();
    let total = records.len();
    for record in records {
        println!("{record}");
        sink.append(&args.user, record);
    }

    eprintln!(
        "{} {total} accepted ({} credit, {} debit)",
        "finsift:".bold(),
        sink.records(&args.user, "credit").len(),
        sink.records(&args.user, "debit").len(),
    );

    ExitCode::SUCCESS
}
