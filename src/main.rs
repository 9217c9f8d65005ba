use std::env;
use std::process::ExitCode;

use pdf_keyword_count::arg_parser::{parse_args, usage};
use pdf_keyword_count::count_keyword_in_pdf;

const EXIT_USAGE: u8 = 1;
const EXIT_DOCUMENT: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    // Expects: [pdf filepath] [keyword]
    let search = match parse_args(&args) {
        Ok(search) => search,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match count_keyword_in_pdf(&search.pdf_path, &search.keyword) {
        Ok(count) => {
            // Sole line on stdout, read by the calling process
            println!("{count}");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_usage() => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage());
            ExitCode::from(EXIT_USAGE)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_DOCUMENT)
        }
    }
}
