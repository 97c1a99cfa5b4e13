use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use dg_parse::{display_error, parse_with_name};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map_or("dg-parse", String::as_str));
        return ExitCode::FAILURE;
    }

    let file_path: &str = &args[1];
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            error!(path = file_path, %err, "failed to read file");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let parsed = parse_with_name(file_contents, Some(String::from(file_name)));
    debug!(elapsed = ?start.elapsed(), "parsed");

    match parsed {
        Ok(root) => {
            println!("{}", root);
            ExitCode::SUCCESS
        }
        Err(err) => {
            display_error(&err);
            ExitCode::FAILURE
        }
    }
}
