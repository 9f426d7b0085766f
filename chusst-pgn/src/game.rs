use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Color {
    White,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Unknown,
}

impl GameResult {
    pub fn try_from_str(value: &str) -> Option<Self> {
        match value {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" => Some(GameResult::Draw),
            "*" => Some(GameResult::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unknown => "*",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for GameResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Winner {
    White,
    Black,
    Unknown,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::White => write!(f, "White"),
            Winner::Black => write!(f, "Black"),
            Winner::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPair {
    pub name: String,
    pub value: String,
}

impl fmt::Display for TagPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} \"{}\"]", self.name, self.value)
    }
}

/// One numbered move: white's ply and, if already played, black's ply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Move {
    number: u32,
    white: String,
    black: String,
    white_annotations: Vec<String>,
    black_annotations: Vec<String>,
}

impl Move {
    pub(crate) fn new(number: u32) -> Self {
        Move {
            number,
            ..Default::default()
        }
    }

    pub(crate) fn set_ply(&mut self, color: Color, text: &str) {
        match color {
            Color::White => self.white = text.to_string(),
            Color::Black => self.black = text.to_string(),
        }
    }

    pub(crate) fn annotate(&mut self, color: Color, code: &str) {
        match color {
            Color::White => self.white_annotations.push(code.to_string()),
            Color::Black => self.black_annotations.push(code.to_string()),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn white(&self) -> &str {
        &self.white
    }

    pub fn black(&self) -> &str {
        &self.black
    }

    /// Numeric annotation glyph codes of one side's ply, without the `$`.
    pub fn annotations(&self, color: Color) -> &[String] {
        match color {
            Color::White => &self.white_annotations,
            Color::Black => &self.black_annotations,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.white)?;
        if !self.black.is_empty() {
            write!(f, " {}", self.black)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    tags: HashMap<String, String>,
    moves: BTreeMap<u32, Move>,
    result: Option<GameResult>,
}

impl Game {
    pub(crate) fn insert_tag(&mut self, name: &str, value: &str) -> bool {
        if self.tags.contains_key(name) {
            return false;
        }
        self.tags.insert(name.to_string(), value.to_string());
        true
    }

    /// Returns the move previously recorded with the same number, if any.
    pub(crate) fn insert_move(&mut self, mv: Move) -> Option<Move> {
        self.moves.insert(mv.number, mv)
    }

    pub(crate) fn set_result(&mut self, result: GameResult) {
        self.result = Some(result);
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }

    /// All tags, sorted by name.
    pub fn tag_pairs(&self) -> Vec<TagPair> {
        let mut pairs: Vec<TagPair> = self
            .tags
            .iter()
            .map(|(name, value)| TagPair {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();
        pairs.sort_by(|a, b| a.name.cmp(&b.name));
        pairs
    }

    pub fn event(&self) -> Option<&str> {
        self.tag("Event")
    }

    pub fn site(&self) -> Option<&str> {
        self.tag("Site")
    }

    pub fn date(&self) -> Option<&str> {
        self.tag("Date")
    }

    pub fn round(&self) -> Option<&str> {
        self.tag("Round")
    }

    pub fn white(&self) -> Option<&str> {
        self.tag("White")
    }

    pub fn black(&self) -> Option<&str> {
        self.tag("Black")
    }

    pub fn result_tag(&self) -> Option<&str> {
        self.tag("Result")
    }

    pub fn get_move(&self, number: u32) -> Option<&Move> {
        self.moves.get(&number)
    }

    /// Moves in ascending move number order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }

    /// Result given by the termination marker of the movetext.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_draw(&self) -> bool {
        self.result == Some(GameResult::Draw)
    }

    pub fn winner(&self) -> Winner {
        match self.result {
            Some(GameResult::WhiteWins) => Winner::White,
            Some(GameResult::BlackWins) => Winner::Black,
            Some(GameResult::Draw) | Some(GameResult::Unknown) | None => Winner::Unknown,
        }
    }
}
