use anyhow::{Context, Result};
use chusst_pgn::{Game, ParseError};
use std::path::PathBuf;

pub fn read_pgn_file(pgn_file_path: &PathBuf) -> Result<(Game, Vec<ParseError>)> {
    let text = std::fs::read_to_string(pgn_file_path).context(format!(
        "Could not read file {}",
        pgn_file_path.to_string_lossy()
    ))?;

    Ok(chusst_pgn::parse(&text)?)
}
