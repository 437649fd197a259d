use std::{fs, iter, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use zrc::{error::PositionalError, source_map::find_line};

use crate::commandline::{Operation, Options};

mod commandline;

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module("zrc")
        .verbosity(options.verbose)
        .init()?;

    let file = options.operation.file();
    let content =
        fs::read_to_string(file).with_context(|| format!("Unable to read source file {file}"))?;

    info!("Lexing {file}");
    match (zrc::lex(&content), &options.operation) {
        (Ok(tokens), Operation::Lex { .. }) => {
            for token in &tokens {
                println!("{token}");
            }
            Ok(ExitCode::SUCCESS)
        }
        (Ok(_), Operation::Check { .. }) => Ok(ExitCode::SUCCESS),
        (Err(issues), _) => {
            for issue in &issues {
                describe_error(issue, &content);
            }
            println!("Lexing failed with {} issue(s)", issues.len());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn describe_error(err: &dyn PositionalError, content: &str) {
    let line = find_line(content, err.interval().start());
    let (column, width) = line.columns(err.interval());

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let gutter = format!("{}", line.line_no());

    println!("{}| {}", gutter, line.for_display());
    println!(
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', column),
        pad_char('^', width),
        err.describe()
    );
}
