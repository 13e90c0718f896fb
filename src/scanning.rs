use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A run of ASCII digits or a single arithmetic operator. Everything else is skipped.
    static ref TOKEN: Regex = Regex::new(r"[0-9]+|[+\-*/]").unwrap();
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    number, operator
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(content: &str) -> Self {
        let kind = if content.starts_with(|c: char| c.is_ascii_digit()) {
            TokenKind::number
        } else {
            TokenKind::operator
        };
        Self{content: content.into(), kind}
    }
}

pub trait Scanner {
    fn get_current(&self) -> Option<&Token>;
    fn advance(&mut self);
    fn is_valid(&self) -> bool;

    fn take_current(&mut self) -> Option<Token> {
        let token = self.get_current().cloned();
        self.advance();
        token
    }
}

/// Scans an expression into tokens up front, dropping any character the
/// token pattern does not cover (letters, spaces, dots, parentheses).
pub struct RegexScanner {
    tokens: Vec<Token>,
    index: usize,
}

impl RegexScanner {
    pub fn new(string: &str) -> Self {
        let tokens = TOKEN
            .find_iter(string)
            .map(|found| Token::new(found.as_str()))
            .collect();
        Self{tokens, index: 0}
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl Scanner for RegexScanner {
    fn get_current(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) {
        if self.is_valid() {
            self.index += 1;
        }
    }

    fn is_valid(&self) -> bool {
        self.index < self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(input: &str) -> Vec<String> {
        RegexScanner::new(input)
            .tokens()
            .iter()
            .map(|token| token.content.clone())
            .collect()
    }

    #[test]
    fn test_numbers_and_operators() {
        assert_eq!(contents("12+3*45"), ["12", "+", "3", "*", "45"]);
        assert_eq!(contents("10 / 2 - 1"), ["10", "/", "2", "-", "1"]);
    }

    #[test]
    fn test_unknown_characters_dropped() {
        assert_eq!(contents("(2 + x3)"), ["2", "+", "3"]);
        assert_eq!(contents("3.5"), ["3", "5"]);
        assert_eq!(contents("٣+1٢"), ["+", "1"]);
        assert!(RegexScanner::new("abc").tokens().is_empty());
        assert!(RegexScanner::new("").tokens().is_empty());
    }

    #[test]
    fn test_token_kinds() {
        let scanner = RegexScanner::new("7-");
        assert_eq!(scanner.tokens()[0].kind, TokenKind::number);
        assert_eq!(scanner.tokens()[1].kind, TokenKind::operator);
    }

    #[test]
    fn test_scanner_walk() {
        let mut scanner = RegexScanner::new("1+2");
        assert_eq!(scanner.take_current().unwrap().content, "1");
        assert_eq!(scanner.take_current().unwrap().content, "+");
        assert!(scanner.is_valid());
        assert_eq!(scanner.take_current().unwrap().content, "2");
        assert!(!scanner.is_valid());
        assert_eq!(scanner.take_current(), None);
    }
}
