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

//! Expression grammar.
//!
//! Precedence is encoded in the nonterminals themselves:
//!
//!   condition → expression relop expression
//!   expression → term ( ( "+" | "-" ) term )*
//!   term → factor ( ( "*" | "/" ) factor )*
//!   factor → "-" primary | primary
//!
//! Every operator is emitted after both of its operands, which is exactly
//! the order a stack machine evaluates them in.

use crate::codegen::Opcode;
use crate::error::RatError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::parser::program::IdAction;

impl Parser {
    /// `<Condition> ::= <Expression> <Relop> <Expression>`
    pub fn condition(&mut self) -> Result<(), RatError> {
        self.production("<Condition> ::= <Expression> <Relop> <Expression>");
        self.expression()?;
        let compare = self.relop()?;
        self.expression()?;
        self.emit(compare, None);
        Ok(())
    }

    /// `<Relop> ::= == | != | > | < | <= | =>`
    fn relop(&mut self) -> Result<Opcode, RatError> {
        self.production("<Relop> ::= == | != | > | < | <= | =>");

        let opcode = self
            .peek()
            .filter(|t| t.kind == TokenKind::Operator)
            .and_then(|t| Opcode::from_relop(&t.lexeme));

        match opcode {
            Some(opcode) => {
                self.match_token(TokenKind::Operator, None);
                Ok(opcode)
            }
            None => Err(self.error("Expected relational operator")),
        }
    }

    /// `<Expression> ::= <Term> <Expression'>`
    pub fn expression(&mut self) -> Result<(), RatError> {
        self.production("<Expression> ::= <Term> <Expression'>");
        self.term()?;
        self.expression_prime()
    }

    /// `<Expression'> ::= + <Term> <Expression'> | - <Term> <Expression'> | <Empty>`
    fn expression_prime(&mut self) -> Result<(), RatError> {
        while let Some((opcode, lexeme)) = self.match_arith(&["+", "-"]) {
            self.production(&format!("<Expression'> ::= {} <Term> <Expression'>", lexeme));
            self.term()?;
            self.emit(opcode, None);
        }
        self.production("<Expression'> ::= <Empty>");
        Ok(())
    }

    /// `<Term> ::= <Factor> <Term'>`
    fn term(&mut self) -> Result<(), RatError> {
        self.production("<Term> ::= <Factor> <Term'>");
        self.factor()?;
        self.term_prime()
    }

    /// `<Term'> ::= * <Factor> <Term'> | / <Factor> <Term'> | <Empty>`
    fn term_prime(&mut self) -> Result<(), RatError> {
        while let Some((opcode, lexeme)) = self.match_arith(&["*", "/"]) {
            self.production(&format!("<Term'> ::= {} <Factor> <Term'>", lexeme));
            self.factor()?;
            self.emit(opcode, None);
        }
        self.production("<Term'> ::= <Empty>");
        Ok(())
    }

    /// `<Factor> ::= - <Primary> | <Primary>`
    ///
    /// Negation has no opcode of its own: `-E` is translated as `0 - E`.
    fn factor(&mut self) -> Result<(), RatError> {
        if self.match_token(TokenKind::Operator, Some("-")).is_some() {
            self.production("<Factor> ::= - <Primary>");
            self.emit(Opcode::Pushi, Some(0));
            self.primary()?;
            self.emit(Opcode::Sub, None);
            return Ok(());
        }

        self.production("<Factor> ::= <Primary>");
        self.primary()
    }

    /// `<Primary> ::= <Identifier> <Primary_Tail> | <Integer> | <Real> | true | false | ( <Expression> )`
    fn primary(&mut self) -> Result<(), RatError> {
        if self.check_kind(TokenKind::Identifier) {
            self.production("<Primary> ::= <Identifier> <Primary_Tail>");
            let name = self.expect_identifier("Expected identifier")?;
            self.primary_tail()?;
            let address = self.address_of(&name)?;
            self.emit(Opcode::Pushm, Some(address));
            return Ok(());
        }

        if self.check_kind(TokenKind::Integer) {
            self.production("<Primary> ::= <Integer>");
            let literal = self.expect(TokenKind::Integer, None, "Expected integer")?;
            let value: i64 = literal.lexeme.parse().map_err(|_| {
                RatError::syntax(
                    format!("Integer literal '{}' is out of range", literal.lexeme),
                    Some(&literal),
                )
            })?;
            self.emit(Opcode::Pushi, Some(value));
            return Ok(());
        }

        if self.check_kind(TokenKind::Real) {
            if self.generates_code() {
                let token = self.tokens[self.current].clone();
                return Err(RatError::unsupported(
                    "Real literals are not supported in code generation",
                    &token,
                ));
            }
            self.production("<Primary> ::= <Real>");
            self.match_token(TokenKind::Real, None);
            return Ok(());
        }

        // Production first, then the token it starts with.
        for (word, value) in [("true", 1), ("false", 0)] {
            if self.check_keyword(word) {
                self.production(&format!("<Primary> ::= {}", word));
                self.match_keyword(word);
                self.emit(Opcode::Pushi, Some(value));
                return Ok(());
            }
        }

        if self.check_separator("(") {
            self.production("<Primary> ::= ( <Expression> )");
            self.match_separator("(");
            self.expression()?;
            self.expect_separator(")", "Expected ')' after expression")?;
            return Ok(());
        }

        Err(self.error("Invalid primary expression"))
    }

    /// `<Primary_Tail> ::= ( <IDs> ) | <Empty>`
    ///
    /// The call form only exists for syntax analysis; there is no call
    /// instruction to translate it into.
    fn primary_tail(&mut self) -> Result<(), RatError> {
        if !self.check_separator("(") {
            self.production("<Primary_Tail> ::= <Empty>");
            return Ok(());
        }

        if self.generates_code() {
            let token = self.tokens[self.current].clone();
            return Err(RatError::unsupported(
                "Function calls are not supported in code generation",
                &token,
            ));
        }

        self.production("<Primary_Tail> ::= ( <IDs> )");
        self.match_separator("(");
        self.ids(IdAction::Collect)?;
        self.expect_separator(")", "Expected ')' after IDs in function call")?;
        Ok(())
    }

    /// Consumes one of the given arithmetic operators, returning its opcode
    /// and lexeme.
    fn match_arith(&mut self, ops: &[&str]) -> Option<(Opcode, String)> {
        let lexeme = ops
            .iter()
            .copied()
            .find(|&op| self.check(TokenKind::Operator, Some(op)))?
            .to_string();
        let opcode = Opcode::from_arith(&lexeme)?;
        self.match_token(TokenKind::Operator, Some(&lexeme));
        Some((opcode, lexeme))
    }
}
