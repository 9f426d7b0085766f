mod converter;
mod reader;

use anyhow::{bail, Context, Result};
use clap::Parser;
use converter::write_game;
use reader::read_pgn_file;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PGN file
    file: String,

    /// Path of the YAML file (if not specified, same as the PGN file with the extension changed)
    #[arg(short, long)]
    output: Option<String>,

    /// Write the YAML file even if the PGN file has errors
    #[arg(long)]
    lenient: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let pgn_path = PathBuf::from(cli.file);

    let (game, errors) = read_pgn_file(&pgn_path).context("Unable to parse PGN file")?;

    if !errors.is_empty() {
        for err in &errors {
            error!("{}", err);
        }
        if !cli.lenient {
            bail!(
                "{} error(s) found in {}",
                errors.len(),
                pgn_path.to_string_lossy()
            );
        }
    }

    let yaml_path = cli.output.map_or_else(
        || {
            let mut path = pgn_path.clone();
            path.set_extension("yaml");
            path
        },
        PathBuf::from,
    );
    println!("Writing YAML file to {}", yaml_path.to_string_lossy());
    write_game(&game, &yaml_path)?;

    Ok(())
}
