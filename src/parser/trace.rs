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

use crate::lexer::token::Token;

/// Ordered log of every production taken and every token consumed.
///
/// ```text
///     <Statement> ::= <Assign>
///     <Assign> ::= <Identifier> = <Expression> ;
/// Token: Identifier, Lexeme: x
/// Token: Operator, Lexeme: =
/// ```
#[derive(Debug, Clone)]
pub struct Trace {
    lines: Vec<String>,
    enabled: bool,
}

impl Trace {
    pub fn new(enabled: bool) -> Self {
        Self {
            lines: Vec::new(),
            enabled,
        }
    }

    pub fn production(&mut self, rule: &str) {
        if self.enabled {
            self.lines.push(format!("    {}", rule));
        }
    }

    pub fn token(&mut self, token: &Token) {
        if self.enabled {
            self.lines
                .push(format!("Token: {}, Lexeme: {}", token.kind.title(), token.lexeme));
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
