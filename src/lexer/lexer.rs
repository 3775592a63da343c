/*
 * ==========================================================================
 * RAT25F - Single-pass compiler front end
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the RAT25F compiler project.
 * 
 * RAT25F is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license texts are available at:
 *    https://opensource.org/licenses/MIT
 *    https://www.apache.org/licenses/LICENSE-2.0
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::error::RatError;
use crate::lexer::keywords::{is_keyword, is_operator, is_operator_start, is_separator};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Scans Rat25F source text into an ordered token sequence.
///
/// This is a hand-written finite-state scanner. Comments (`"..."`) and
/// whitespace are dropped; everything else becomes exactly one token or a
/// lexical error.
///
/// # Example
/// ```rust
/// let tokens = rat25f::lexer::tokenize("integer x;")?;
/// assert_eq!(tokens.len(), 3);
/// # Ok::<(), rat25f::error::RatError>(())
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, RatError> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;
    Ok(lexer.tokens)
}

struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    line_start: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    fn scan_tokens(&mut self) -> Result<(), RatError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        Ok(())
    }

    fn scan_token(&mut self) -> Result<(), RatError> {
        let start = self.current;
        let ch = self.advance();

        match ch {
            '\n' => self.newline(),
            c if c.is_whitespace() => {}

            // Comments run from one double quote to the next.
            '"' => self.comment(),

            c if c.is_ascii_digit() || c == '.' => self.number(start)?,

            c if c.is_alphabetic() => self.identifier(start),

            c if is_operator_start(c) || is_separator(c) => self.operator_or_separator(start)?,

            other => {
                return Err(RatError::lexical(
                    format!("Unexpected character '{}'", other),
                    self.span_at(start),
                ));
            }
        }

        Ok(())
    }

    fn comment(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.advance() == '\n' {
                self.newline();
            }
        }

        // An unterminated comment simply runs to end of input.
        if !self.is_at_end() {
            self.advance();
        }
    }

    fn identifier(&mut self, start: usize) {
        while self.peek().is_alphanumeric() || self.peek() == '_' || self.peek() == '$' {
            self.advance();
        }

        let text = self.text(start);
        let kind = if is_keyword(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        self.push(kind, text, start);
    }

    fn number(&mut self, start: usize) -> Result<(), RatError> {
        let mut is_real = false;

        if self.chars[start] == '.' {
            if !self.peek().is_ascii_digit() {
                return Err(RatError::lexical("Expected digits after '.'", self.span_at(start)));
            }
            is_real = true;
        }

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if !is_real && self.peek() == '.' {
            self.advance(); // consume '.'
            if !self.peek().is_ascii_digit() {
                return Err(RatError::lexical(
                    format!("Malformed real literal '{}'", self.text(start)),
                    self.span_at(start),
                ));
            }
            is_real = true;
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let kind = if is_real { TokenKind::Real } else { TokenKind::Integer };
        let text = self.text(start);
        self.push(kind, text, start);
        Ok(())
    }

    fn operator_or_separator(&mut self, start: usize) -> Result<(), RatError> {
        let first = self.chars[start];

        // Two-character operators win over their one-character prefixes.
        if !self.is_at_end() {
            let pair: String = [first, self.peek()].iter().collect();
            if is_operator(&pair) {
                self.advance();
                self.push(TokenKind::Operator, pair, start);
                return Ok(());
            }
        }

        let single = first.to_string();
        if is_operator(&single) {
            self.push(TokenKind::Operator, single, start);
        } else if is_separator(first) {
            self.push(TokenKind::Separator, single, start);
        } else {
            return Err(RatError::lexical(
                format!("Unexpected character '{}'", first),
                self.span_at(start),
            ));
        }

        Ok(())
    }

    fn push(&mut self, kind: TokenKind, lexeme: String, start: usize) {
        let span = self.span_at(start);
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    fn text(&self, start: usize) -> String {
        self.chars[start..self.current].iter().collect()
    }

    fn span_at(&self, start: usize) -> Span {
        Span::new(self.line, start.saturating_sub(self.line_start))
    }

    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
