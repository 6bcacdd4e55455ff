use mical::InputGuard;
use nu_ansi_term::{Color, Style};
use reedline::{StyledText, ValidationResult, Validator};

use crate::lexer::{Token, calculate_depth};

/// Colors input by token; deny-listed words stand out.
pub struct Highlighter {
    guard: InputGuard,
}

impl Highlighter {
    pub fn new(guard: InputGuard) -> Self {
        Self { guard }
    }

    // Not `InputGuard::validate`: that logs, and this runs on every keystroke.
    fn is_deny_listed(&self, word: &str) -> bool {
        self.guard
            .deny_list()
            .iter()
            .any(|pattern| word.contains(pattern.as_str()))
    }

    fn style(&self, token: Token, text: &str) -> Style {
        match token {
            Token::Number => Style::new().fg(Color::Cyan),
            Token::Plus | Token::Minus | Token::Star => Style::new().fg(Color::White),
            Token::LParen | Token::RParen => Style::new().fg(Color::DarkGray),
            Token::Word if self.is_deny_listed(text) => Style::new().fg(Color::Red).bold(),
            Token::Word => Style::new().fg(Color::Yellow),
        }
    }
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        use logos::Logos;

        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token, span) in Token::lexer(line).spanned() {
            if span.start > curr_end {
                output.push((Style::new(), line[curr_end..span.start].to_string()));
            }
            let text = &line[span.clone()];
            let style = match token {
                Ok(token) => self.style(token, text),
                Err(_) => Style::new().fg(Color::Red).underline(),
            };
            output.push((style, text.to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new(), line[curr_end..].to_string()));
        }

        output
    }
}

/// Keeps the prompt open while parentheses are unbalanced.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reedline::Highlighter as _;

    fn plain(text: &StyledText) -> String {
        text.buffer.iter().map(|(_, s)| s.as_str()).collect()
    }

    #[test]
    fn test_highlight_keeps_text() {
        let highlighter = Highlighter::new(InputGuard::default());
        for line in ["2 * (3 + 4)", "  eval(1)  ", "1 $ 2", ""] {
            assert_eq!(plain(&highlighter.highlight(line, 0)), line);
        }
    }

    #[test]
    fn test_deny_listed_words_are_bold_red() {
        let highlighter = Highlighter::new(InputGuard::default());
        let styled = highlighter.highlight("eval", 0);
        assert_eq!(styled.buffer[0].0, Style::new().fg(Color::Red).bold());

        let styled = highlighter.highlight("abc", 0);
        assert_eq!(styled.buffer[0].0, Style::new().fg(Color::Yellow));
    }

    #[test]
    fn test_validator_waits_for_closing_paren() {
        assert!(matches!(
            ParenValidator.validate("2 * (3 +"),
            ValidationResult::Incomplete
        ));
        assert!(matches!(
            ParenValidator.validate("2 * (3 + 4)"),
            ValidationResult::Complete
        ));
    }
}
