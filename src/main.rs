use std::{fmt::Display, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use trigger_lexer::{
    completion::{completion::byte_offset, triggers::TRIGGER_TOKENIZER},
    config::config::RuleSetConfig,
    errors::errors::Error,
    format_error, Tokenizer,
};

/// Prints the trigger tokens (`@mention`, `#reference`, `:smiley:`) found in
/// each line of a file.
#[derive(Debug, Parser)]
#[command(name = "trigger-lexer", version)]
struct Cli {
    /// File to scan line by line.
    file: PathBuf,

    /// TOML rule set to use instead of the built-in trigger rules.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Only print the token under the caret at LINE:COLUMN (both 1-based).
    #[arg(long, value_parser = parse_caret)]
    at: Option<(usize, usize)>,
}

fn parse_caret(value: &str) -> Result<(usize, usize), String> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COLUMN, got `{}`", value))?;

    let line = line.parse::<usize>().map_err(|err| err.to_string())?;
    let column = column.parse::<usize>().map_err(|err| err.to_string())?;

    if line == 0 || column == 0 {
        return Err(String::from("line and column start at 1"));
    }

    Ok((line, column))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file_name = cli.file.display().to_string();

    let contents = match read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error: failed to read {}: {}", file_name, err);
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.rules {
        Some(path) => match RuleSetConfig::load(path).and_then(|config| config.build()) {
            Ok(tokenizer) => run(&tokenizer, &contents, cli.at),
            Err(error) => {
                eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
                eprintln!("-> {}: {}", path.display(), error);
                return ExitCode::FAILURE;
            }
        },
        None => run(&*TRIGGER_TOKENIZER, &contents, cli.at),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err((error, line_number)) => {
            let line = contents.lines().nth(line_number - 1).unwrap_or_default();
            eprintln!("{}", format_error(&error, &file_name, line_number, line));
            ExitCode::FAILURE
        }
    }
}

/// Scans `contents`; errors carry the 1-based line they were raised on.
fn run<K, S>(
    tokenizer: &Tokenizer<K, S>,
    contents: &str,
    at: Option<(usize, usize)>,
) -> Result<(), (Error, usize)>
where
    K: Clone + Display,
    S: Clone + PartialEq,
{
    let start = Instant::now();

    if let Some((line_number, column)) = at {
        let line = contents.lines().nth(line_number - 1).unwrap_or_default();
        let caret = byte_offset(line, column - 1);

        match tokenizer
            .find_token_at(line, caret, true)
            .map_err(|err| (err, line_number))?
        {
            Some(token) => println!("{}:{} {} {:?}", line_number, token.offset, token.kind, token.text),
            None => println!("no token"),
        }

        debug!(elapsed = ?start.elapsed(), "looked up caret");
        return Ok(());
    }

    let mut count = 0;
    for (index, line) in contents.lines().enumerate() {
        let tokens = tokenizer.tokenize(line).map_err(|err| (err, index + 1))?;

        for token in tokens {
            println!("{}:{} {} {:?}", index + 1, token.offset, token.kind, token.text);
            count += 1;
        }
    }

    info!(tokens = count, elapsed = ?start.elapsed(), "tokenized");
    Ok(())
}
