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

use crate::lexer::token::Token;
use crate::span::Span;

/// The category of a Rat25F compilation failure.
///
/// Every kind is fatal. The front end reports at most one error per run and
/// never attempts to resynchronise after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The scanner met a character sequence that is not a Rat25F token.
    Lexical,

    /// The token stream does not match the grammar.
    Syntax,

    /// An identifier was declared a second time.
    DuplicateDeclaration,

    /// An identifier was used before being declared.
    UndeclaredIdentifier,

    /// Legal syntax that the code generator refuses (`real`, calls).
    UnsupportedFeature,

    /// Backpatch underflow or an out-of-range patch. A translator bug,
    /// never the fault of the input program.
    InternalConsistency,

    /// Reading the source or writing the listing failed.
    Io,

    /// The options file could not be read or parsed.
    Config,
}

impl ErrorKind {
    /// Stable error code (R0001, R0002, …)
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "R0001",
            ErrorKind::Syntax => "R0002",
            ErrorKind::DuplicateDeclaration => "R0003",
            ErrorKind::UndeclaredIdentifier => "R0004",
            ErrorKind::UnsupportedFeature => "R0005",
            ErrorKind::InternalConsistency => "R0900",
            ErrorKind::Io => "R1001",
            ErrorKind::Config => "R1002",
        }
    }

    /// True for the kinds raised by the parser/translator while it walks
    /// the token stream.
    pub fn is_parse_error(self) -> bool {
        matches!(
            self,
            ErrorKind::Syntax
                | ErrorKind::DuplicateDeclaration
                | ErrorKind::UndeclaredIdentifier
                | ErrorKind::UnsupportedFeature
        )
    }
}

#[derive(Debug, Clone)]
pub struct RatError {
    pub kind: ErrorKind,

    /// Stable error code, derived from `kind`
    pub code: &'static str,

    /// Human-readable expectation / explanation
    pub message: String,

    /// The offending token. `None` for parse errors means end of input.
    pub token: Option<Token>,

    /// Primary source location, when one is known
    pub span: Option<Span>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl RatError {
    /// Generic constructor
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: kind.code(),
            message: message.into(),
            token: None,
            span: None,
            help: None,
        }
    }

    /// Structural mismatch against the grammar. `found` is the token the
    /// parser was looking at, or `None` at end of input.
    pub fn syntax(message: impl Into<String>, found: Option<&Token>) -> Self {
        let err = Self::new(ErrorKind::Syntax, message);
        match found {
            Some(token) => err.at(token),
            None => err,
        }
    }

    pub fn duplicate_declaration(token: &Token) -> Self {
        Self::new(
            ErrorKind::DuplicateDeclaration,
            format!("Identifier '{}' already declared.", token.lexeme),
        )
        .at(token)
    }

    pub fn undeclared_identifier(token: &Token) -> Self {
        Self::new(
            ErrorKind::UndeclaredIdentifier,
            format!("Identifier '{}' not declared.", token.lexeme),
        )
        .at(token)
        .with_help("declare it in the declaration list before the first statement")
    }

    pub fn unsupported(message: impl Into<String>, token: &Token) -> Self {
        Self::new(ErrorKind::UnsupportedFeature, message).at(token)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalConsistency, message)
    }

    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message).at_span(span)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    /// Attach the offending token (and its location).
    pub fn at(mut self, token: &Token) -> Self {
        self.span = Some(token.span);
        self.token = Some(token.clone());
        self
    }

    pub fn at_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Source line of the error, if known.
    pub fn line(&self) -> Option<usize> {
        self.span.map(|span| span.line)
    }
}

impl fmt::Display for RatError {
    /// The single-line form used in place of the trace when a compilation
    /// fails.
    ///
    /// ```text
    /// Parser error at line 4: Unexpected token 'fi' of type KEYWORD. Expected ';'
    /// Parser error at end of file: Expected '#' at the end of the program
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_parse_error() {
            return match &self.token {
                Some(token) => write!(
                    f,
                    "Parser error at line {}: Unexpected token '{}' of type {}. {}",
                    token.line(),
                    token.lexeme,
                    token.kind,
                    self.message
                ),
                None => write!(f, "Parser error at end of file: {}", self.message),
            };
        }

        match (self.kind, self.span) {
            (ErrorKind::Lexical, Some(span)) => write!(
                f,
                "Lexer error at line {}, column {}: {}",
                span.line,
                span.column + 1,
                self.message
            ),
            (ErrorKind::InternalConsistency, _) => write!(f, "Internal error: {}", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for RatError {}
