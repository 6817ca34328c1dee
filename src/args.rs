use chill::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Files the bank session is run from
#[derive(Debug)]
pub struct InputArgs {
    pub users_path: PathBuf,
    pub events_path: PathBuf,
}

/// Parses the input arguments, requiring exactly two valid filepaths: the users file, then the
/// session events file
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = env::args().skip(1);

    let users = args.next().ok_or_else(|| {
        InputArgsError::Parse("First argument must be the users file.".to_string())
    })?;

    let events = args.next().ok_or_else(|| {
        InputArgsError::Parse("Second argument must be the session events file.".to_string())
    })?;

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra}")))?
    }

    Ok(InputArgs {
        users_path: canonicalize(users)?,
        events_path: canonicalize(events)?,
    })
}

fn canonicalize(filename: String) -> Result<PathBuf> {
    let path =
        fs::canonicalize(&filename).with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}
