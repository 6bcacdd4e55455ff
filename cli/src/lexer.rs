use logos::Logos;

/// Tokens as the REPL sees them while the user is still typing.
///
/// Looser than the grammar: words and stray symbols are tokens too, so the
/// highlighter can color them instead of giving up.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[regex(r"[0-9]+")]
    Number,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
}

/// Number of `(` still open at the end of `buffer`.
///
/// Returns `None` when the buffer holds a character no token matches; such
/// input is complete as far as the REPL is concerned and the parser reports it.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token in Token::lexer(buffer) {
        match token {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}
