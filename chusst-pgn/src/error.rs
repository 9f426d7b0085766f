use crate::token::TokenKind;

/// Recoverable problems found while parsing. They are accumulated and the
/// parse keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("{name} tag already exists in the tag pair section")]
    DuplicateTag { name: String },

    #[error("Result tag is {tag} but the game terminates with {marker}")]
    ResultMismatch { tag: String, marker: String },
}

/// Broken lexer/parser contract. Aborts the whole parse call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFault {
    #[error("move number token '{0}' cannot be converted to an integer")]
    InvalidMoveNumber(String),
}
