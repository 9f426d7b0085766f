use anyhow::{Context, Result};
use chusst_pgn::{Color, Game, Move};
use serde::ser::SerializeMap;
use serde::Serialize;
use std::path::PathBuf;

struct SerializedMove<'a>(&'a Move);

impl<'a> Serialize for SerializedMove<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mv = self.0;
        let white_annotations = mv.annotations(Color::White);
        let black_annotations = mv.annotations(Color::Black);

        let mut entries = 1;
        if !mv.black().is_empty() {
            entries += 1;
        }
        if !white_annotations.is_empty() {
            entries += 1;
        }
        if !black_annotations.is_empty() {
            entries += 1;
        }

        let mut map = serializer.serialize_map(Some(entries))?;

        map.serialize_entry("white", mv.white())?;
        if !white_annotations.is_empty() {
            map.serialize_entry("white_annotations", white_annotations)?;
        }
        if !mv.black().is_empty() {
            map.serialize_entry("black", mv.black())?;
        }
        if !black_annotations.is_empty() {
            map.serialize_entry("black_annotations", black_annotations)?;
        }

        map.end()
    }
}

struct SerializedMoveList<'a>(&'a Game);

impl<'a> Serialize for SerializedMoveList<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.moves().count()))?;

        for mv in self.0.moves() {
            map.serialize_entry(&mv.number(), &SerializedMove(mv))?;
        }

        map.end()
    }
}

struct SerializedTags<'a>(&'a Game);

impl<'a> Serialize for SerializedTags<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let tags = self.0.tag_pairs();
        let mut map = serializer.serialize_map(Some(tags.len()))?;

        for tag in &tags {
            map.serialize_entry(&tag.name, &tag.value)?;
        }

        map.end()
    }
}

struct SerializedGameEnding<'a>(&'a Game);

impl<'a> Serialize for SerializedGameEnding<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let result = self.0.result();
        let mut map = serializer.serialize_map(Some(if result.is_some() { 2 } else { 1 }))?;

        if let Some(result) = result {
            map.serialize_entry("result", &result)?;
        }
        map.serialize_entry("winner", &self.0.winner())?;

        map.end()
    }
}

pub struct GameDocument<'a>(pub &'a Game);

impl<'a> Serialize for GameDocument<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;

        map.serialize_entry("tags", &SerializedTags(self.0))?;
        map.serialize_entry("ending", &SerializedGameEnding(self.0))?;
        map.serialize_entry("moves", &SerializedMoveList(self.0))?;

        map.end()
    }
}

pub fn write_yaml(yaml_path: &PathBuf, game: &Game) -> Result<()> {
    let output = std::fs::File::create(yaml_path).context(format!(
        "Could not open file {} for writing",
        yaml_path.to_string_lossy()
    ))?;

    serde_yaml::to_writer(output, &GameDocument(game)).context(format!(
        "Error writing YAML data to {}",
        yaml_path.to_string_lossy()
    ))
}
