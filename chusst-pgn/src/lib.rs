mod error;
pub mod game;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::{ParseError, ParseFault};
pub use game::{Color, Game, GameResult, Move, TagPair, Winner};

use lexer::Lexer;
use parser::Parser;

/// Tokenizes and parses a single game record.
///
/// Returns the game together with the recoverable errors found on the way; it
/// is up to the caller to decide whether a non-empty list is acceptable.
pub fn parse(text: &str) -> Result<(Game, Vec<ParseError>), ParseFault> {
    Parser::new(Lexer::new(text)).parse_game()
}
