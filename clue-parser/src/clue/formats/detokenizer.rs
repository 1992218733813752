//! Detokenizer for Clue
//!
//! Converts a token stream back into source text. Whitespace is not kept by the lexer, so the
//! output is canonical: tokens joined by single spaces. Re-lexing the output yields the same
//! token kinds and texts.

use crate::clue::token::Token;

/// Trait for converting a token to its source spelling
pub trait ToClueString {
    fn to_clue_string(&self) -> String;
}

impl ToClueString for Token {
    fn to_clue_string(&self) -> String {
        match self.kind.fixed_text() {
            Some(text) => text.to_string(),
            // Literals keep their text, EOF has none
            None => self.text.clone(),
        }
    }
}

pub fn detokenize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| !token.is_eof())
        .map(ToClueString::to_clue_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::lexing::tokenize;

    #[test]
    fn test_detokenize_normalizes_whitespace() {
        let tokens = tokenize("local   x=\n{1.2.3}").unwrap();
        assert_eq!(detokenize(&tokens), "local x = { 1.2.3 }");
    }

    #[test]
    fn test_detokenize_relexes_identically() {
        let source = "match 1 {default=>{2}} try{}{}catch e{}";
        let tokens = tokenize(source).unwrap();
        let again = tokenize(&detokenize(&tokens)).unwrap();

        let strip = |tokens: &[Token]| {
            tokens
                .iter()
                .map(|t| (t.kind, t.text.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&tokens), strip(&again));
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&tokenize("").unwrap()), "");
    }
}
