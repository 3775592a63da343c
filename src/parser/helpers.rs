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

use crate::codegen::{Opcode, Qualifier};
use crate::error::RatError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    // ------------------------------------------------------------------
    // Lookahead
    // ------------------------------------------------------------------

    /// The next unconsumed token, or `None` at end of input.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Checks the current token without consuming it.
    pub fn check(&self, kind: TokenKind, lexeme: Option<&str>) -> bool {
        self.peek().is_some_and(|t| t.is(kind, lexeme))
    }

    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.check(kind, None)
    }

    pub fn check_keyword(&self, kw: &str) -> bool {
        self.check(TokenKind::Keyword, Some(kw))
    }

    pub fn check_separator(&self, sep: &str) -> bool {
        self.check(TokenKind::Separator, Some(sep))
    }

    /// True when the current token is one of the three type keywords.
    pub fn check_qualifier(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Keyword && Qualifier::from_keyword(&t.lexeme).is_some())
    }

    // ------------------------------------------------------------------
    // Consumption
    // ------------------------------------------------------------------

    /// The `match` primitive: consumes the current token if it has the
    /// expected kind (and lexeme, when given), logging it to the trace.
    pub fn match_token(&mut self, kind: TokenKind, lexeme: Option<&str>) -> Option<Token> {
        if !self.check(kind, lexeme) {
            return None;
        }

        let token = self.tokens[self.current].clone();
        self.current += 1;
        self.trace.token(&token);
        Some(token)
    }

    pub fn match_keyword(&mut self, kw: &str) -> bool {
        self.match_token(TokenKind::Keyword, Some(kw)).is_some()
    }

    pub fn match_separator(&mut self, sep: &str) -> bool {
        self.match_token(TokenKind::Separator, Some(sep)).is_some()
    }

    /// Consumes a required token or fails with a syntax error.
    pub fn expect(
        &mut self,
        kind: TokenKind,
        lexeme: Option<&str>,
        message: &str,
    ) -> Result<Token, RatError> {
        self.match_token(kind, lexeme)
            .ok_or_else(|| self.error(message))
    }

    pub fn expect_keyword(&mut self, kw: &str, message: &str) -> Result<Token, RatError> {
        self.expect(TokenKind::Keyword, Some(kw), message)
    }

    pub fn expect_separator(&mut self, sep: &str, message: &str) -> Result<Token, RatError> {
        self.expect(TokenKind::Separator, Some(sep), message)
    }

    pub fn expect_identifier(&mut self, message: &str) -> Result<Token, RatError> {
        self.expect(TokenKind::Identifier, None, message)
    }

    /// Syntax error positioned at the current token (or end of input).
    pub fn error(&self, message: &str) -> RatError {
        RatError::syntax(message, self.peek())
    }

    pub fn production(&mut self, rule: &str) {
        self.trace.production(rule);
    }

    // ------------------------------------------------------------------
    // Semantic actions
    //
    // In syntax-only mode these are no-ops, so the grammar methods can
    // call them unconditionally.
    // ------------------------------------------------------------------

    pub fn generates_code(&self) -> bool {
        self.mode.generates_code()
    }

    /// Appends an instruction and returns its address.
    pub fn emit(&mut self, opcode: Opcode, operand: Option<i64>) -> usize {
        if !self.generates_code() {
            return 0;
        }
        self.code.emit(opcode, operand)
    }

    /// Enters `token` into the symbol table with the given qualifier.
    pub fn declare(&mut self, token: &Token, qualifier: Qualifier) -> Result<(), RatError> {
        if !self.generates_code() {
            return Ok(());
        }

        let declared_type = qualifier
            .declared_type()
            .ok_or_else(|| RatError::unsupported("Type 'real' is not supported in code generation", token))?;

        self.symbols.declare(token, declared_type)?;
        Ok(())
    }

    /// Memory address of a declared identifier.
    pub fn address_of(&self, token: &Token) -> Result<i64, RatError> {
        if !self.generates_code() {
            return Ok(0);
        }
        Ok(self.symbols.resolve(token)?.address)
    }

    /// Remembers a placeholder jump whose target is not known yet.
    pub fn defer(&mut self, address: usize) {
        if self.generates_code() {
            self.backpatch.push(address);
        }
    }

    /// Pops the most recent placeholder and points it at the next
    /// instruction to be emitted.
    pub fn backpatch_to_next(&mut self) -> Result<(), RatError> {
        if !self.generates_code() {
            return Ok(());
        }

        let target = self.code.next_address();
        let pending = self.backpatch.pop()?;
        self.code.patch(pending, target as i64)
    }
}
