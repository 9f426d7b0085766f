use crate::error::{ParseError, ParseFault};
use crate::game::{Color, Game, GameResult, Move, TagPair};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use tracing::{debug, trace, warn};

enum Statement {
    TagPair(TagPair),
    Move(Move),
    Termination(GameResult),
    Nothing,
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    peek: Token<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parses statements until the end of the input.
    ///
    /// Recoverable errors do not stop the parse: the game is built from
    /// whatever could be read and is returned along with every error found.
    pub fn parse_game(mut self) -> Result<(Game, Vec<ParseError>), ParseFault> {
        let mut game = Game::default();

        while !self.current.is(TokenKind::EndOfInput) {
            match self.parse_statement()? {
                Statement::TagPair(tag) => self.add_tag(&mut game, tag),
                Statement::Move(mv) => {
                    debug!("move: {}", mv);
                    if let Some(previous) = game.insert_move(mv) {
                        warn!("move {} replaces '{}'", previous.number(), previous);
                    }
                }
                Statement::Termination(result) => self.set_result(&mut game, result),
                Statement::Nothing => {
                    trace!("skipping {} '{}'", self.current.kind, self.current.text);
                    self.next_token();
                }
            }
        }

        Ok((game, self.errors))
    }

    fn add_tag(&mut self, game: &mut Game, tag: TagPair) {
        debug!("tag: {} = {}", tag.name, tag.value);

        if !game.insert_tag(&tag.name, &tag.value) {
            self.report(ParseError::DuplicateTag { name: tag.name });
            return;
        }

        if tag.name == "Result" {
            if let Some(result) = game.result() {
                self.check_result(&tag.value, result);
            }
        }
    }

    fn set_result(&mut self, game: &mut Game, result: GameResult) {
        debug!("result: {}", result);

        if let Some(tag) = game.result_tag() {
            self.check_result(tag, result);
        }
        game.set_result(result);
    }

    fn check_result(&mut self, tag: &str, result: GameResult) {
        if tag != result.as_str() {
            self.report(ParseError::ResultMismatch {
                tag: tag.to_string(),
                marker: result.to_string(),
            });
        }
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseFault> {
        let statement = match self.current.kind {
            TokenKind::LBracket => self.parse_tag_pair(),
            TokenKind::Integer => self.parse_move()?,
            TokenKind::Symbol | TokenKind::Asterisk => self.parse_termination(),
            _ => Statement::Nothing,
        };
        Ok(statement)
    }

    fn parse_tag_pair(&mut self) -> Statement {
        if !self.expect_peek(TokenKind::Symbol) {
            return Statement::Nothing;
        }
        let name = self.current.text;

        if !self.expect_peek(TokenKind::String) {
            return Statement::Nothing;
        }
        let value = self.current.text;

        // A missing closing bracket is reported, but the tag is kept
        self.expect_peek(TokenKind::RBracket);
        self.next_token();

        Statement::TagPair(TagPair {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    fn parse_move(&mut self) -> Result<Statement, ParseFault> {
        let number = self
            .current
            .text
            .parse::<u32>()
            .map_err(|_| ParseFault::InvalidMoveNumber(self.current.text.to_string()))?;
        let mut mv = Move::new(number);

        while self.peek.is(TokenKind::Period) {
            self.next_token();
        }

        if !self.peek.is(TokenKind::Symbol) && !self.peek.is(TokenKind::Asterisk) {
            self.peek_error(TokenKind::Symbol);
            return Ok(Statement::Nothing);
        }
        self.next_token();

        for color in [Color::White, Color::Black] {
            // A termination marker ends the move and stays as the current token
            if self.current.is_termination() || !self.current.is(TokenKind::Symbol) {
                break;
            }

            mv.set_ply(color, self.current.text);
            self.next_token();

            while self.current.is(TokenKind::Nag) {
                mv.annotate(color, self.current.text);
                self.next_token();
            }
        }

        Ok(Statement::Move(mv))
    }

    fn parse_termination(&mut self) -> Statement {
        match GameResult::try_from_str(self.current.text) {
            Some(result) => {
                self.next_token();
                Statement::Termination(result)
            }
            None => Statement::Nothing,
        }
    }

    fn next_token(&mut self) {
        self.current = self.peek;
        self.peek = self.lexer.next_token();
    }

    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek.is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.report(ParseError::UnexpectedToken {
            expected,
            found: self.peek.kind,
        });
    }

    fn report(&mut self, error: ParseError) {
        warn!("{}", error);
        self.errors.push(error);
    }
}
