//! Lexer
//!
//!     Wraps the logos-generated [TokenKind] lexer into the cursor the parser drives.
//!
//!     The lexer is lazy: a token is only scanned when the parser asks for it, either by
//!     consuming it ([Lexer::next_token]) or by looking at it ([Lexer::peek], [Lexer::peek_nth]).
//!     Peeked tokens are buffered so they are scanned once.
//!
//!     Scanning always restarts a fresh logos lexer at the byte cursor, which makes the scan
//!     position a plain offset: [Lexer::checkpoint] captures it and [Lexer::rewind] restores it.
//!     The grammar never needs this, but tooling that re-scans a region does.
//!
//!     Once the input is exhausted the lexer returns [TokenKind::Eof] on every call. A character
//!     no rule matches yields a [LexError]; the cursor does not move past it, so asking again
//!     reports the same error.

use logos::Logos;
use std::collections::VecDeque;

use super::ast::position::SourceLocation;
use super::error::LexError;
use super::token::{Token, TokenKind};

/// A saved scan position, see [Lexer::checkpoint]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn offset(&self) -> usize {
        self.0
    }
}

pub struct Lexer<'src> {
    source: &'src str,
    locations: SourceLocation<'src>,
    /// Byte offset where the next scan resumes
    cursor: usize,
    /// Tokens scanned ahead of the consumer
    lookahead: VecDeque<Token>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            locations: SourceLocation::new(source),
            cursor: 0,
            lookahead: VecDeque::new(),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Consume and return the next token
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    /// The next token, without consuming it
    pub fn peek(&mut self) -> Result<&Token, LexError> {
        self.peek_nth(0)
    }

    /// The token `n` places ahead (0 is the next token), without consuming anything
    pub fn peek_nth(&mut self, n: usize) -> Result<&Token, LexError> {
        while self.lookahead.len() <= n {
            let token = match self.lookahead.back() {
                Some(last) if last.is_eof() => last.clone(),
                _ => self.scan()?,
            };
            self.lookahead.push_back(token);
        }
        Ok(&self.lookahead[n])
    }

    /// Capture the position of the next unconsumed token
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(
            self.lookahead
                .front()
                .map(|token| token.span.start)
                .unwrap_or(self.cursor),
        )
    }

    /// Resume scanning from a previously captured checkpoint
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.0.min(self.source.len());
        self.lookahead.clear();
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        let base = self.cursor;
        let rest = &self.source[base..];
        let mut inner = TokenKind::lexer(rest);

        match inner.next() {
            None => {
                let end = self.source.len();
                self.cursor = end;
                Ok(Token::new(
                    TokenKind::Eof,
                    "",
                    end..end,
                    self.locations.position(end),
                ))
            }
            Some(Ok(kind)) => {
                let span = inner.span();
                let start = base + span.start;
                let end = base + span.end;
                self.cursor = end;
                Ok(Token::new(
                    kind,
                    inner.slice(),
                    start..end,
                    self.locations.position(start),
                ))
            }
            Some(Err(())) => {
                let start = base + inner.span().start;
                let character = self.source[start..].chars().next().unwrap_or('\0');
                Err(LexError {
                    character,
                    position: self.locations.position(start),
                    span: start..start + character.len_utf8(),
                })
            }
        }
    }
}

/// Tokenize the whole source. The returned vector always ends with a single EOF token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::ast::position::SourcePosition;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("tokenizes")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds(" \n\t "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_token_text_and_positions() {
        let tokens = tokenize("local x\n  = 1.2.3").unwrap();

        assert_eq!(tokens[0].text, "local");
        assert_eq!(tokens[0].position, SourcePosition::new(0, 1, 1));
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[1].span, 6..7);
        assert_eq!(tokens[2].kind, TokenKind::Equals);
        assert_eq!(tokens[2].position, SourcePosition::new(10, 2, 3));
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].text, "1.2.3");
        assert_eq!(tokens[4].kind, TokenKind::Eof);
        assert_eq!(tokens[4].span, 17..17);
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("1");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
        for _ in 0..3 {
            let token = lexer.next_token().unwrap();
            assert!(token.is_eof());
            assert_eq!(token.span, 1..1);
        }
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lexer = Lexer::new("match x");
        assert_eq!(lexer.peek().unwrap().kind, TokenKind::Match);
        assert_eq!(lexer.peek_nth(1).unwrap().kind, TokenKind::Identifier);
        assert_eq!(lexer.peek_nth(2).unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.peek_nth(5).unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Match);
        assert_eq!(lexer.next_token().unwrap().text, "x");
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_checkpoint_and_rewind() {
        let mut lexer = Lexer::new("{ 1 2 }");
        lexer.next_token().unwrap();
        let checkpoint = lexer.checkpoint();
        assert_eq!(lexer.next_token().unwrap().text, "1");
        lexer.peek_nth(1).unwrap();
        lexer.rewind(checkpoint);
        assert_eq!(lexer.next_token().unwrap().text, "1");
        assert_eq!(lexer.next_token().unwrap().text, "2");
    }

    #[test]
    fn test_checkpoint_accounts_for_lookahead() {
        let mut lexer = Lexer::new("1 2");
        lexer.peek().unwrap();
        let checkpoint = lexer.checkpoint();
        assert_eq!(checkpoint.offset(), 0);
        lexer.next_token().unwrap();
        lexer.rewind(checkpoint);
        assert_eq!(lexer.next_token().unwrap().text, "1");
    }

    #[test]
    fn test_unrecognized_character() {
        let err = tokenize("{ 1 # }").unwrap_err();
        assert_eq!(err.character, '#');
        assert_eq!(err.position, SourcePosition::new(4, 1, 5));
        assert_eq!(err.span, 4..5);
    }

    #[test]
    fn test_error_is_sticky() {
        let mut lexer = Lexer::new("@");
        assert!(lexer.next_token().is_err());
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_non_ascii_error_position() {
        let err = tokenize("{\n  é }").unwrap_err();
        assert_eq!(err.character, 'é');
        assert_eq!(err.position.line, 2);
        assert_eq!(err.position.column, 3);
        assert_eq!(err.span, 4..6);
    }
}
