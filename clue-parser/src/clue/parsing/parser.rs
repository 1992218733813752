//! Recursive-descent parser for Clue
//!
//! The parser owns the [Lexer] and pulls tokens from it on demand. Each `parse_*` method
//! corresponds to one grammar nonterminal, consumes exactly the tokens of that production and
//! leaves the cursor on the first token after it.

use std::ops::Range;

use super::config::ParserConfig;
use super::trace::TraceEvent;
use crate::clue::ast::{
    Block, CatchBlock, ElseBlock, ElseIfBlock, Expr, Identifier, IfBlock, IfStmt, LocalDecl,
    MatchBlock, MatchCase, MatchExpr, MatchStmt, Number, Program, TryBlock, TryStmt,
};
use crate::clue::error::{ClueError, ParseError};
use crate::clue::lexing::Lexer;
use crate::clue::token::{Token, TokenKind};

/// Words Clue reserves for future syntax. They lex as identifiers but get a dedicated hint.
const RESERVED_WORDS: &[&str] = &[
    "constructor",
    "enum",
    "fn",
    "for",
    "function",
    "return",
    "struct",
    "while",
];

type ParseResult<T> = Result<T, ClueError>;

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    config: ParserConfig,
    depth: usize,
    trace: Vec<TraceEvent>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: &'src str, config: ParserConfig) -> Self {
        Self {
            lexer: Lexer::new(source),
            config,
            depth: 0,
            trace: Vec::new(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Events recorded so far (empty unless tracing is enabled)
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    pub fn into_trace(self) -> Vec<TraceEvent> {
        self.trace
    }

    /// Parse the whole input: an optional top-level expression list followed by end of input
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        self.record("program")?;

        let body = if self.peek()?.is_eof() {
            Vec::new()
        } else {
            self.parse_exprlist()?
        };

        let next = self.peek()?.clone();
        if !next.is_eof() {
            return Err(self.unexpected(&next, "an expression or end of input"));
        }

        Ok(Program {
            body,
            span: 0..self.lexer.source().len(),
        })
    }

    /// `expr`: dispatch on the leading token
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.depth += 1;
        let result = self.parse_expr_at_depth();
        self.depth -= 1;
        result
    }

    fn parse_expr_at_depth(&mut self) -> ParseResult<Expr> {
        let next = self.peek()?.clone();

        let limit = self.config.effective_max_nesting_depth();
        if self.depth > limit {
            return Err(ParseError::new(
                format!("maximum nesting depth {} exceeded", limit),
                next.position,
                next.span,
            )
            .into());
        }

        match next.kind {
            TokenKind::OpenBrace => self.parse_block().map(Expr::Block),
            TokenKind::Number => self.parse_number().map(Expr::Number),
            TokenKind::Local => self.parse_local_decl().map(Expr::LocalDecl),
            TokenKind::If => self.parse_if_stmt().map(Expr::If),
            TokenKind::Match => self.parse_match_stmt().map(Expr::Match),
            TokenKind::Try => self.parse_try_stmt().map(Expr::Try),
            _ => Err(self.unexpected(&next, "an expression")),
        }
    }

    /// `exprlist`: one or more expressions, stopping at the first token that cannot start one
    pub fn parse_exprlist(&mut self) -> ParseResult<Vec<Expr>> {
        self.record("exprlist")?;

        let first = self.peek()?.clone();
        if !first.kind.starts_expr() {
            let err = ParseError::new(
                "empty expression list",
                first.position,
                first.span.clone(),
            );
            return Err(self.with_hint(err, &first).into());
        }

        let mut exprs = Vec::new();
        while self.peek()?.kind.starts_expr() {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    /// `block`: braces around an optional expression list
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        self.record("block")?;

        let open = self.expect(TokenKind::OpenBrace, "`{`")?;
        let exprs = if self.peek()?.kind.starts_expr() {
            self.parse_exprlist()?
        } else {
            Vec::new()
        };
        let close = self.expect_close(&open)?;

        Ok(Block {
            exprs,
            span: open.span.start..close.span.end,
        })
    }

    fn parse_number(&mut self) -> ParseResult<Number> {
        self.record("number")?;

        let token = self.expect(TokenKind::Number, "a number")?;
        Ok(Number {
            literal: token.text,
            span: token.span,
        })
    }

    /// `local_decl`: `local name = expr`
    pub fn parse_local_decl(&mut self) -> ParseResult<LocalDecl> {
        self.record("local_decl")?;

        let keyword = self.expect(TokenKind::Local, "`local`")?;

        let name_token = self.peek()?.clone();
        if !name_token.is(TokenKind::Identifier) {
            let mut err = ParseError::new(
                "expected identifier after local",
                name_token.position,
                name_token.span.clone(),
            );
            if name_token.kind.is_keyword() {
                err = err.with_help(format!(
                    "`{}` is a keyword and cannot be used as a variable name",
                    name_token.text
                ));
            }
            return Err(err.into());
        }
        self.advance()?;

        self.expect(TokenKind::Equals, "`=`")?;
        let init = self.parse_expr()?;
        let span = keyword.span.start..init.span().end;

        Ok(LocalDecl {
            name: Identifier {
                name: name_token.text,
                span: name_token.span,
            },
            init: Box::new(init),
            span,
        })
    }

    /// `if_stmt`: one `if` block, any number of `elseif` blocks, an optional `else` block
    pub fn parse_if_stmt(&mut self) -> ParseResult<IfStmt> {
        self.record("if_stmt")?;

        let if_block = self.parse_if_block()?;
        let mut end = if_block.span.end;

        let mut elseif_blocks = Vec::new();
        while self.peek()?.is(TokenKind::ElseIf) {
            let block = self.parse_elseif_block()?;
            end = block.span.end;
            elseif_blocks.push(block);
        }

        let else_block = if self.peek()?.is(TokenKind::Else) {
            let block = self.parse_else_block()?;
            end = block.span.end;
            Some(block)
        } else {
            None
        };

        Ok(IfStmt {
            span: if_block.span.start..end,
            if_block,
            elseif_blocks,
            else_block,
        })
    }

    fn parse_if_block(&mut self) -> ParseResult<IfBlock> {
        self.record("if_block")?;

        let keyword = self.expect(TokenKind::If, "`if`")?;
        let condition = self.parse_expr()?;
        let body = self.parse_block()?;

        Ok(IfBlock {
            span: keyword.span.start..body.span.end,
            condition: Box::new(condition),
            body,
        })
    }

    fn parse_elseif_block(&mut self) -> ParseResult<ElseIfBlock> {
        self.record("elseif_block")?;

        let keyword = self.expect(TokenKind::ElseIf, "`elseif`")?;
        let condition = self.parse_expr()?;
        let body = self.parse_block()?;

        Ok(ElseIfBlock {
            span: keyword.span.start..body.span.end,
            condition: Box::new(condition),
            body,
        })
    }

    fn parse_else_block(&mut self) -> ParseResult<ElseBlock> {
        self.record("else_block")?;

        let keyword = self.expect(TokenKind::Else, "`else`")?;
        let body = self.parse_block()?;

        Ok(ElseBlock {
            span: keyword.span.start..body.span.end,
            body,
        })
    }

    /// `match_stmt`: scrutinee followed by a braced, non-empty list of cases
    pub fn parse_match_stmt(&mut self) -> ParseResult<MatchStmt> {
        self.record("match_stmt")?;

        let keyword = self.expect(TokenKind::Match, "`match`")?;
        let scrutinee = self.parse_expr()?;
        let block = self.parse_match_block()?;

        Ok(MatchStmt {
            span: keyword.span.start..block.span.end,
            scrutinee: Box::new(scrutinee),
            block,
        })
    }

    fn parse_match_block(&mut self) -> ParseResult<MatchBlock> {
        self.record("match_block")?;

        let open = self.expect(TokenKind::OpenBrace, "`{`")?;

        let first = self.peek()?.clone();
        if first.is(TokenKind::CloseBrace) {
            return Err(ParseError::new("empty match block", first.position, first.span)
                .with_help("a match needs at least one case, e.g. `default => {}`")
                .into());
        }

        let mut cases = Vec::new();
        loop {
            cases.push(self.parse_match_case()?);

            let next = self.peek()?;
            if next.is(TokenKind::CloseBrace) || next.is_eof() {
                break;
            }
        }
        let close = self.expect_close(&open)?;

        Ok(MatchBlock {
            cases,
            span: open.span.start..close.span.end,
        })
    }

    fn parse_match_case(&mut self) -> ParseResult<MatchCase> {
        self.record("match_case")?;

        let pattern = self.parse_match_expr()?;

        let arrow = self.peek()?.clone();
        if !arrow.is(TokenKind::Arrow) {
            let mut err = ParseError::new(
                format!("unexpected token: {}, expected `=>`", arrow.describe()),
                arrow.position,
                arrow.span.clone(),
            );
            if arrow.is(TokenKind::Equals) {
                err = err.with_help("did you mean `=>`?");
            }
            return Err(err.into());
        }
        self.advance()?;

        let body = self.parse_block()?;

        Ok(MatchCase {
            span: pattern.span().start..body.span.end,
            pattern,
            body,
        })
    }

    fn parse_match_expr(&mut self) -> ParseResult<MatchExpr> {
        self.record("match_expr")?;

        let next = self.peek()?.clone();
        if next.is(TokenKind::Default) {
            self.advance()?;
            return Ok(MatchExpr::Default { span: next.span });
        }
        if !next.kind.starts_expr() {
            return Err(self.unexpected(&next, "`default` or an expression"));
        }
        Ok(MatchExpr::Expr(Box::new(self.parse_expr()?)))
    }

    /// `try_stmt`: guarded expression, recovery block, optional catch
    pub fn parse_try_stmt(&mut self) -> ParseResult<TryStmt> {
        self.record("try_stmt")?;

        let try_block = self.parse_try_block()?;
        let catch_block = if self.peek()?.is(TokenKind::Catch) {
            Some(self.parse_catch_block()?)
        } else {
            None
        };

        let end = catch_block
            .as_ref()
            .map(|c| c.span.end)
            .unwrap_or(try_block.span.end);

        Ok(TryStmt {
            span: try_block.span.start..end,
            try_block,
            catch_block,
        })
    }

    fn parse_try_block(&mut self) -> ParseResult<TryBlock> {
        self.record("try_block")?;

        let keyword = self.expect(TokenKind::Try, "`try`")?;
        let guarded = self.parse_expr()?;
        let recovery = self.parse_block()?;

        Ok(TryBlock {
            span: keyword.span.start..recovery.span.end,
            guarded: Box::new(guarded),
            recovery,
        })
    }

    fn parse_catch_block(&mut self) -> ParseResult<CatchBlock> {
        self.record("catch_block")?;

        let keyword = self.expect(TokenKind::Catch, "`catch`")?;

        let next = self.peek()?.clone();
        let binding = if next.is(TokenKind::Identifier) {
            self.advance()?;
            Some(Identifier {
                name: next.text,
                span: next.span,
            })
        } else if next.kind.is_keyword() {
            return Err(ParseError::new(
                format!("keyword `{}` cannot be used as a catch binding", next.text),
                next.position,
                next.span,
            )
            .with_help("use a plain identifier, e.g. `catch err { ... }`")
            .into());
        } else {
            None
        };

        let body = self.parse_block()?;

        Ok(CatchBlock {
            span: keyword.span.start..body.span.end,
            binding,
            body,
        })
    }

    // ------------------------------------------------------------------------
    // Token helpers
    // ------------------------------------------------------------------------

    fn peek(&mut self) -> ParseResult<&Token> {
        Ok(self.lexer.peek()?)
    }

    fn advance(&mut self) -> ParseResult<Token> {
        Ok(self.lexer.next_token()?)
    }

    /// Consume a token of `kind` or fail with an `unexpected token` error naming `expected`
    fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<Token> {
        let next = self.peek()?.clone();
        if next.is(kind) {
            self.advance()
        } else {
            Err(self.unexpected(&next, expected))
        }
    }

    /// Consume the `}` closing the brace at `open`
    fn expect_close(&mut self, open: &Token) -> ParseResult<Token> {
        let next = self.peek()?.clone();
        if next.is(TokenKind::CloseBrace) {
            return self.advance();
        }
        if next.is_eof() {
            return Err(ParseError::new("unterminated block", next.position, next.span)
                .with_help(format!(
                    "the block opened at {} is never closed; add a `}}`",
                    open.position
                ))
                .into());
        }
        Err(self.unexpected(&next, "`}`"))
    }

    fn unexpected(&self, found: &Token, expected: &str) -> ClueError {
        let err = ParseError::new(
            format!("unexpected token: {}, expected {}", found.describe(), expected),
            found.position,
            found.span.clone(),
        );
        self.with_hint(err, found).into()
    }

    /// Add a help note when the offending token is a word reserved for future syntax
    fn with_hint(&self, err: ParseError, found: &Token) -> ParseError {
        if found.is(TokenKind::Identifier) && RESERVED_WORDS.contains(&found.text.as_str()) {
            err.with_help(format!(
                "`{}` is reserved in Clue and cannot be used yet",
                found.text
            ))
        } else {
            err
        }
    }

    fn record(&mut self, production: &'static str) -> ParseResult<()> {
        if self.config.trace {
            let position = self.peek()?.position;
            self.trace.push(TraceEvent {
                depth: self.depth,
                production,
                position,
            });
        }
        Ok(())
    }

    /// Byte span of the token the parser is looking at
    pub fn current_span(&mut self) -> ParseResult<Range<usize>> {
        Ok(self.peek()?.span.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(source: &str) -> Parser<'_> {
        Parser::new(source)
    }

    #[test]
    fn test_parse_expr_leaves_trailing_tokens() {
        let mut p = parser("1 2");
        let expr = p.parse_expr().unwrap();
        assert_eq!(expr.as_number().unwrap().literal, "1");
        assert_eq!(p.current_span().unwrap(), 2..3);
    }

    #[test]
    fn test_parse_exprlist_stops_before_close_brace() {
        let mut p = parser("1 {} 2 }");
        let exprs = p.parse_exprlist().unwrap();
        assert_eq!(exprs.len(), 3);
        assert_eq!(p.current_span().unwrap(), 7..8);
    }

    #[test]
    fn test_parse_exprlist_requires_one() {
        let err = parser("}").parse_exprlist().unwrap_err();
        assert_eq!(err.message(), "empty expression list");
        assert_eq!(err.position().offset, 0);
    }

    #[test]
    fn test_empty_exprlist_keeps_span_and_hint() {
        let err = parser("  struct").parse_exprlist().unwrap_err();
        assert_eq!(err.message(), "empty expression list");
        assert_eq!(err.span(), 2..8);
        assert_eq!(
            err.help(),
            Some("`struct` is reserved in Clue and cannot be used yet")
        );
    }

    #[test]
    fn test_parse_block_spans() {
        let block = parser("{ 1 }").parse_block().unwrap();
        assert_eq!(block.span, 0..5);
        assert_eq!(block.exprs[0].span(), 2..3);
    }

    #[test]
    fn test_if_chain_stops_at_unrelated_token() {
        let mut p = parser("if 1 {} 2");
        let stmt = p.parse_if_stmt().unwrap();
        assert!(stmt.elseif_blocks.is_empty());
        assert!(stmt.else_block.is_none());
        assert_eq!(stmt.span, 0..7);
        assert_eq!(p.current_span().unwrap(), 8..9);
    }

    #[test]
    fn test_reserved_word_hint() {
        let err = parser("while").parse_expr().unwrap_err();
        assert!(err.message().starts_with("unexpected token"));
        assert_eq!(
            err.help(),
            Some("`while` is reserved in Clue and cannot be used yet")
        );
    }

    #[test]
    fn test_trace_records_productions() {
        let config = ParserConfig::default().with_trace(true);
        let mut p = Parser::with_config("{1}", config);
        p.parse_program().unwrap();
        let productions: Vec<_> = p.trace().iter().map(|e| e.production).collect();
        assert_eq!(
            productions,
            vec!["program", "exprlist", "block", "exprlist", "number"]
        );
        let depths: Vec<_> = p.trace().iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn test_trace_off_records_nothing() {
        let mut p = parser("{1}");
        p.parse_program().unwrap();
        assert!(p.into_trace().is_empty());
    }
}
