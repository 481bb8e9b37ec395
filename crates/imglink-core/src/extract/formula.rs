//! Parser for the `HYPERLINK("<url>"[, <label>])` formula shape.

use thiserror::Error;

const FUNCTION_NAME: &str = "HYPERLINK";

/// Why a formula did not yield a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaParseError {
    #[error("not a HYPERLINK formula")]
    NotHyperlink,
    #[error("expected a quoted URL at offset {offset}")]
    ExpectedString { offset: usize },
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },
    #[error("expected ',' or ')' at offset {offset}")]
    ExpectedDelimiter { offset: usize },
    #[error("unexpected trailing text at offset {offset}")]
    TrailingText { offset: usize },
    #[error("{text:?} is not an absolute URL with a host")]
    NotAUrl { text: String },
}

/// Returns the link target of a `HYPERLINK` formula.
///
/// Accepts an optional leading `=`, any case for the function name, whitespace
/// between tokens, `""` escapes inside the URL string and any second argument
/// (quoted label or cell reference). The URL must parse as an absolute URL with
/// a host.
pub fn parse_hyperlink_formula(formula: &str) -> Result<String, FormulaParseError> {
    let mut p = Cursor::new(formula);
    p.skip_ws();
    p.eat('=');
    p.skip_ws();
    if !p.eat_keyword(FUNCTION_NAME) {
        return Err(FormulaParseError::NotHyperlink);
    }
    p.skip_ws();
    if !p.eat('(') {
        return Err(FormulaParseError::NotHyperlink);
    }
    p.skip_ws();
    let url = p.string_literal()?;
    p.skip_ws();
    if p.eat(',') {
        p.skip_label()?;
    }
    if !p.eat(')') {
        return Err(FormulaParseError::ExpectedDelimiter { offset: p.pos });
    }
    p.skip_ws();
    if !p.at_end() {
        return Err(FormulaParseError::TrailingText { offset: p.pos });
    }

    let url = url.trim().to_string();
    if !looks_like_url(&url) {
        return Err(FormulaParseError::NotAUrl { text: url });
    }
    Ok(url)
}

fn looks_like_url(text: &str) -> bool {
    match url::Url::parse(text) {
        Ok(u) => u.has_host(),
        Err(_) => false,
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, want: char) -> bool {
        if self.peek() == Some(want) {
            self.pos += want.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        match rest.get(..keyword.len()) {
            Some(head) if head.eq_ignore_ascii_case(keyword) => {
                self.pos += keyword.len();
                true
            }
            _ => false,
        }
    }

    /// Reads a `"..."` literal where `""` stands for one quote.
    fn string_literal(&mut self) -> Result<String, FormulaParseError> {
        let start = self.pos;
        if !self.eat('"') {
            return Err(FormulaParseError::ExpectedString { offset: start });
        }
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(FormulaParseError::UnterminatedString { offset: start }),
                Some('"') => {
                    self.pos += 1;
                    if self.eat('"') {
                        out.push('"');
                    } else {
                        return Ok(out);
                    }
                }
                Some(c) => {
                    out.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
    }

    /// Skips the label argument up to (not including) the closing paren.
    fn skip_label(&mut self) -> Result<(), FormulaParseError> {
        self.skip_ws();
        if self.peek() == Some('"') {
            self.string_literal()?;
            self.skip_ws();
            return Ok(());
        }
        let mut depth = 0usize;
        while let Some(c) = self.peek() {
            match c {
                '(' => depth += 1,
                ')' if depth == 0 => return Ok(()),
                ')' => depth -= 1,
                '"' => {
                    self.string_literal()?;
                    continue;
                }
                _ => {}
            }
            self.pos += c.len_utf8();
        }
        Ok(())
    }
}
