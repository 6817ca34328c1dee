use chill::Result;

use std::{fs::File, path::Path};

use anyhow::Context;
use csv::{Reader, ReaderBuilder, Trim};

/// Rows may leave trailing columns out, e.g. a bare `logout`
pub fn build_csv_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(filepath)
        .with_context(|| format!("Couldn't open csv file: {}", filepath.display()))?;

    Ok(reader)
}
