mod serializer;

use self::serializer::write_yaml;
use anyhow::Result;
use chusst_pgn::Game;
use std::path::PathBuf;

pub fn write_game(game: &Game, path: &PathBuf) -> Result<()> {
    write_yaml(path, game)
}
