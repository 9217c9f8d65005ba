use std::path::PathBuf;

use log::warn;

pub const PROGRAM_NAME: &str = "pdf_keyword_count";

/// Parsed command line
#[derive(Debug, PartialEq, Eq)]
pub struct SearchArgs {
    pub pdf_path: PathBuf,
    pub keyword: String,
}

/// Raised when the program is invoked with too few arguments
#[derive(Debug, thiserror::Error)]
#[error("{}", usage())]
pub struct UsageError;

pub fn usage() -> String {
    format!("Usage: {PROGRAM_NAME} <pdf_path> <keyword>")
}

/// Parses `args` as produced by `std::env::args` (program name first)
pub fn parse_args(args: &[String]) -> Result<SearchArgs, UsageError> {
    // Need both the filepath and the keyword
    let (Some(pdf_path), Some(keyword)) = (args.get(1), args.get(2)) else {
        return Err(UsageError);
    };

    // Only the first two are used
    if args.len() > 3 {
        warn!("Ignoring {} extra argument(s): {:?}", args.len() - 3, &args[3..]);
    }

    return Ok(SearchArgs {
        pdf_path: PathBuf::from(pdf_path),
        keyword: keyword.to_string(),
    });
}
