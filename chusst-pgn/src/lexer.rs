use crate::token::{Token, TokenKind};
use nom::bytes::complete::{take_till, take_while};
use nom::character::complete::{char, digit0, multispace0, satisfy};
use nom::combinator::{opt, recognize};
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;
use tracing::trace;

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '#' | '=' | ':' | '-' | '/')
}

fn quoted_string(input: &str) -> IResult<&str, &str> {
    // An unterminated string runs until the end of the input
    preceded(char('"'), terminated(take_till(|c: char| c == '"'), opt(char('"'))))(input)
}

fn nag(input: &str) -> IResult<&str, &str> {
    preceded(char('$'), digit0)(input)
}

/// Move numbers, moves and results share the same characters. A run stops
/// right before a `.`, `*` or `$`, so `1.` yields `1` and `e4$1` yields `e4`.
fn symbol_or_integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphanumeric()),
        take_while(is_symbol_char),
    ))(input)
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn skip_whitespace(&mut self) {
        if let Ok((rest, _)) = multispace0::<&str, nom::error::Error<&str>>(self.rest) {
            self.rest = rest;
        }
    }

    /// Consumes a single character, whatever it is.
    fn bump(&mut self) -> &'a str {
        let rest = self.rest;
        let len = rest.chars().next().map_or(0, char::len_utf8);
        let (head, tail) = rest.split_at(len);
        self.rest = tail;
        head
    }

    fn run<F>(&mut self, mut parser: F) -> Option<&'a str>
    where
        F: FnMut(&'a str) -> IResult<&'a str, &'a str>,
    {
        match parser(self.rest) {
            Ok((rest, output)) => {
                self.rest = rest;
                Some(output)
            }
            Err(_) => None,
        }
    }
}

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            cursor: Cursor { rest: input },
            finished: false,
        }
    }

    /// Returns the next token. Once the input is exhausted, every call returns
    /// an end-of-input token.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.skip_whitespace();

        let Some(c) = self.cursor.peek() else {
            return Token::end_of_input();
        };

        let token = if let Some(kind) = TokenKind::from_char(c) {
            Token::new(kind, self.cursor.bump())
        } else {
            match c {
                '"' => self.read(TokenKind::String, quoted_string),
                '$' => self.read(TokenKind::Nag, nag),
                c if c.is_ascii_alphanumeric() => {
                    let token = self.read(TokenKind::Symbol, symbol_or_integer);
                    if token.text.chars().all(|c| c.is_ascii_digit()) {
                        Token::new(TokenKind::Integer, token.text)
                    } else {
                        token
                    }
                }
                _ => Token::new(TokenKind::Illegal, self.cursor.bump()),
            }
        };

        trace!("token: {} '{}'", token.kind, token.text);
        token
    }

    fn read<F>(&mut self, kind: TokenKind, parser: F) -> Token<'a>
    where
        F: FnMut(&'a str) -> IResult<&'a str, &'a str>,
    {
        match self.cursor.run(parser) {
            Some(text) => Token::new(kind, text),
            None => Token::new(TokenKind::Illegal, self.cursor.bump()),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.is(TokenKind::EndOfInput);
        Some(token)
    }
}

#[cfg(test)]
mod tests;
