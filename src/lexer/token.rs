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

use std::fmt;

use serde::Serialize;

use crate::span::Span;

/// Represents the **category of a lexical token** in Rat25F.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser/Translator → Listing
/// ```
///
/// The parser selects productions by kind first and lexeme second, so the
/// category vocabulary is deliberately small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A reserved word: `function`, `if`, `fi`, `while`, `integer`, …
    ///
    /// Keyword detection is handled by `keywords.rs`.
    Keyword,

    /// A user-defined name.
    Identifier,

    /// An unsigned whole-number literal: `42`
    Integer,

    /// A decimal literal: `3.14`, `.5`
    Real,

    /// Arithmetic, relational or assignment operator.
    Operator,

    /// Structural punctuation: `# ( ) { } , ;`
    Separator,
}

impl TokenKind {
    /// Title-case name used in production traces (`Token: Keyword, ...`).
    pub fn title(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Real => "Real",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
        }
    }
}

impl fmt::Display for TokenKind {
    /// Upper-case category name, as printed in error lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
        };
        write!(f, "{}", name)
    }
}

/// Represents a **single lexical token**.
///
/// # Example Tokens
/// ```text
/// integer  →  { kind: Keyword,    lexeme: "integer", line: 1 }
/// count    →  { kind: Identifier, lexeme: "count",   line: 1 }
/// 42       →  { kind: Integer,    lexeme: "42",      line: 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token starts.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Builds a token that only knows its source line, the shape an
    /// external token source hands over.
    pub fn at_line(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self::new(kind, lexeme, Span::line(line))
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    /// True when this token has the given kind and, if supplied, lexeme.
    pub fn is(&self, kind: TokenKind, lexeme: Option<&str>) -> bool {
        self.kind == kind && lexeme.map_or(true, |lex| self.lexeme == lex)
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme. Users care about *what they wrote*, not the
    /// token's internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
