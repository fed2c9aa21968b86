//! CLI tool to extract name/birth-date records from a flat roster file.

use clap::Parser;
use roster_rs::{extract_from_str, split_line};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Extract full names and birth-date fields from a roster file.
///
/// Each input line is expected to hold two name tokens followed by free
/// text. Lines that do not match are skipped.
#[derive(Parser)]
#[command(name = "roster-scan")]
struct Cli {
    /// Roster file (newline-separated records, UTF-8)
    input: String,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show line/record counts and skipped lines on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let input_text = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{}': {e}", cli.input);
            process::exit(1);
        }
    };

    if cli.verbose {
        for (line_num, line) in input_text.lines().enumerate() {
            if !line.trim().is_empty() && split_line(line).is_none() {
                eprintln!("Warning: line {} skipped: {}", line_num + 1, line.trim());
            }
        }
    }

    let batch = extract_from_str(&input_text);

    let mut output = String::new();
    output.push_str("Names:\n");
    for name in batch.names() {
        output.push_str(name);
        output.push('\n');
    }
    output.push_str("\nBirth dates:\n");
    for remainder in batch.remainders() {
        output.push_str(remainder);
        output.push('\n');
    }

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    if cli.verbose {
        let line_count = input_text.lines().count();
        eprintln!("Records:  {line_count} lines in -> {} records out", batch.len());
    }
}
