use crate::lexer::{tokenize, Token};
use crate::matcher::{contains_phrase, contains_term};
use thiserror::Error;

/// Typed query AST. Precedence, lowest to highest: OR, AND, NOT, atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Term(String),
    Phrase(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn matches(&self, text: &str) -> bool {
        match self {
            Expr::Term(term) => contains_term(text, term),
            Expr::Phrase(phrase) => contains_phrase(text, phrase),
            Expr::Not(inner) => !inner.matches(text),
            Expr::And(lhs, rhs) => lhs.matches(text) && rhs.matches(text),
            Expr::Or(lhs, rhs) => lhs.matches(text) || rhs.matches(text),
        }
    }
}

#[derive(Debug, Error)]
enum ParseError {
    #[error("expected a term, phrase or group, found {0:?}")]
    UnexpectedToken(Token),
    #[error("expected a term, phrase or group, found end of input")]
    UnexpectedEnd,
    #[error("unparsed trailing input at token {0:?}")]
    TrailingInput(Token),
}

/// A parsed query, ready to be evaluated many times.
///
/// `parse` never fails: an empty expression yields a match-everything query,
/// and a malformed one degrades to a literal case-insensitive substring
/// match of the raw input (logged, never surfaced as an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    kind: QueryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum QueryKind {
    MatchAll,
    Expr(Expr),
    Literal(String),
}

impl Query {
    pub fn parse(input: &str) -> Self {
        if input.trim().is_empty() {
            return Self {
                kind: QueryKind::MatchAll,
            };
        }

        let tokens = tokenize(input);
        match Parser::new(&tokens).parse() {
            Ok(expr) => Self {
                kind: QueryKind::Expr(expr),
            },
            Err(err) => {
                log::warn!("query {input:?} failed to parse ({err}); matching it literally");
                Self {
                    kind: QueryKind::Literal(input.to_string()),
                }
            }
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        match &self.kind {
            QueryKind::MatchAll => true,
            QueryKind::Expr(expr) => expr.matches(text),
            QueryKind::Literal(raw) => contains_term(text, raw),
        }
    }

    /// True when the query degraded to the literal-substring fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, QueryKind::Literal(_))
    }

    /// The parsed expression, when structured parsing succeeded.
    pub fn expr(&self) -> Option<&Expr> {
        match &self.kind {
            QueryKind::Expr(expr) => Some(expr),
            _ => None,
        }
    }
}

/// Recursive-descent parser over the token slice.
///
/// Recovery is deliberate behavior, not leniency for its own sake: an
/// unmatched `(` is treated as if closed at the end of the expression and a
/// trailing dangling AND/OR is dropped. Anything else unparseable bubbles up
/// as an error and triggers the literal fallback in `Query::parse`.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_or()?;
        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(ParseError::TrailingInput(token.clone())),
        }
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_and()?;
        while matches!(self.peek(), Some(Token::Or)) {
            self.advance();
            if self.at_end() {
                // Dangling trailing OR: drop the operator.
                break;
            }
            let rhs = self.parse_and()?;
            lhs = Expr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_not()?;
        loop {
            match self.peek() {
                Some(Token::And) => {
                    self.advance();
                    if self.at_end() {
                        // Dangling trailing AND: drop the operator.
                        break;
                    }
                }
                // Adjacent atoms combine as an implicit AND.
                Some(Token::Term(_) | Token::Phrase(_) | Token::Not | Token::LParen) => {}
                _ => break,
            }
            let rhs = self.parse_not()?;
            lhs = Expr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.peek(), Some(Token::Not)) {
            self.advance();
            let inner = self.parse_not()?;
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match self.peek().cloned() {
            Some(Token::Term(term)) => {
                self.advance();
                Ok(Expr::Term(term))
            }
            Some(Token::Phrase(phrase)) => {
                self.advance();
                Ok(Expr::Phrase(phrase))
            }
            Some(Token::LParen) => {
                self.advance();
                let inner = self.parse_or()?;
                // A missing closing paren is tolerated: the group is treated
                // as closed right here.
                if matches!(self.peek(), Some(Token::RParen)) {
                    self.advance();
                }
                Ok(inner)
            }
            Some(token) => Err(ParseError::UnexpectedToken(token)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn term(s: &str) -> Expr {
        Expr::Term(s.to_string())
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let query = Query::parse("a&b|c");
        assert_eq!(
            query.expr(),
            Some(&Expr::Or(
                Box::new(Expr::And(Box::new(term("a")), Box::new(term("b")))),
                Box::new(term("c")),
            ))
        );
    }

    #[test]
    fn not_binds_tighter_than_and() {
        let query = Query::parse("-a&b");
        assert_eq!(
            query.expr(),
            Some(&Expr::And(
                Box::new(Expr::Not(Box::new(term("a")))),
                Box::new(term("b")),
            ))
        );
    }

    #[test]
    fn keywords_parse_like_symbols() {
        assert_eq!(Query::parse("a AND b OR c"), Query::parse("a&b|c"));
        assert_eq!(Query::parse("not a"), Query::parse("-a"));
    }

    #[test]
    fn adjacent_terms_combine_as_and() {
        assert_eq!(Query::parse("run fast"), Query::parse("run & fast"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(Query::parse("").matches("anything"));
        assert!(Query::parse("   ").matches(""));
    }

    #[test]
    fn parenthesized_group_overrides_precedence() {
        let query = Query::parse("a&(b|c)");
        assert!(query.matches("a c"));
        assert!(!query.matches("b c"));
    }

    #[test]
    fn unmatched_open_paren_is_closed_at_end() {
        assert_eq!(Query::parse("(a|b"), Query::parse("(a|b)"));
        assert_eq!(Query::parse("a&(b"), Query::parse("a&(b)"));
    }

    #[test]
    fn trailing_dangling_operator_is_dropped() {
        assert_eq!(Query::parse("a&"), Query::parse("a"));
        assert_eq!(Query::parse("a|b|"), Query::parse("a|b"));
    }

    #[test]
    fn malformed_input_falls_back_to_literal_substring() {
        let query = Query::parse(")(");
        assert!(query.is_fallback());
        assert!(query.matches("weird )( text"));
        assert!(!query.matches("plain text"));
    }

    #[test]
    fn unterminated_phrase_still_matches_with_boundaries() {
        let query = Query::parse("\"eat food");
        assert!(query.matches("I eat food."));
        assert!(!query.matches("eaten foodstuff"));
    }

    #[test]
    fn scenario_run_jump_not_fast() {
        let query = Query::parse("(run|jump)&-fast");
        assert!(!query.matches("he can run but not fast"));
        assert!(query.matches("he can run quickly"));
    }

    #[test]
    fn evaluation_is_case_insensitive() {
        let query = Query::parse("GUARD");
        assert!(query.matches("to guard a flock"));
    }
}
