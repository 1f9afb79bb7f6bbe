#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Term(String),
    Phrase(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

/// Split a raw expression into tokens.
///
/// Whitespace separates terms and is otherwise insignificant. `&`, `|`, `-`
/// are symbolic operators; the bare words AND/OR/NOT (any case) are keyword
/// operators. A quote opens a phrase that runs to the closing quote or, when
/// unterminated, to the end of the input.
pub(crate) fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '&' => {
                chars.next();
                tokens.push(Token::And);
            }
            '|' => {
                chars.next();
                tokens.push(Token::Or);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Not);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '"' => {
                chars.next();
                let mut phrase = String::new();
                for c in chars.by_ref() {
                    if c == '"' {
                        break;
                    }
                    phrase.push(c);
                }
                // An unterminated quote is treated as closed at end of input.
                tokens.push(Token::Phrase(phrase));
            }
            _ => {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || matches!(c, '&' | '|' | '-' | '(' | ')' | '"') {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(keyword_or_term(word));
            }
        }
    }

    tokens
}

fn keyword_or_term(word: String) -> Token {
    if word.eq_ignore_ascii_case("and") {
        Token::And
    } else if word.eq_ignore_ascii_case("or") {
        Token::Or
    } else if word.eq_ignore_ascii_case("not") {
        Token::Not
    } else {
        Token::Term(word)
    }
}
