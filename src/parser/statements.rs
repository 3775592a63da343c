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

use crate::codegen::Opcode;
use crate::error::RatError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::parser::program::IdAction;

impl Parser {
    /// `<Statement List> ::= <Statement> <Statement List'>`
    pub fn statement_list(&mut self) -> Result<(), RatError> {
        self.production("<Statement List> ::= <Statement> <Statement List'>");
        self.statement()?;
        self.statement_list_prime()
    }

    fn statement_list_prime(&mut self) -> Result<(), RatError> {
        while self.starts_statement() {
            self.production("<Statement List'> ::= <Statement> <Statement List'>");
            self.statement()?;
        }
        self.production("<Statement List'> ::= <Empty>");
        Ok(())
    }

    /// FIRST(<Statement>): `{`, an identifier, or one of the statement
    /// keywords.
    fn starts_statement(&self) -> bool {
        self.check_separator("{")
            || self.check_kind(TokenKind::Identifier)
            || ["if", "return", "put", "get", "while"]
                .iter()
                .any(|kw| self.check_keyword(kw))
    }

    /// Dispatches on the lookahead token to one of the seven statement forms.
    pub fn statement(&mut self) -> Result<(), RatError> {
        if self.is_at_end() {
            return Err(self.error("Unexpected end of input, expected a statement"));
        }

        if self.check_separator("{") {
            self.production("<Statement> ::= <Compound>");
            return self.compound();
        }

        if self.check_kind(TokenKind::Identifier) {
            self.production("<Statement> ::= <Assign>");
            return self.assign();
        }

        if self.check_keyword("if") {
            self.production("<Statement> ::= <If>");
            return self.if_statement();
        }

        if self.check_keyword("return") {
            self.production("<Statement> ::= <Return>");
            return self.return_statement();
        }

        if self.check_keyword("put") {
            self.production("<Statement> ::= <Print>");
            return self.print_statement();
        }

        if self.check_keyword("get") {
            self.production("<Statement> ::= <Scan>");
            return self.scan();
        }

        if self.check_keyword("while") {
            self.production("<Statement> ::= <While>");
            return self.while_statement();
        }

        Err(self.error("Invalid statement"))
    }

    /// `<Compound> ::= { <Statement List> }`
    fn compound(&mut self) -> Result<(), RatError> {
        self.production("<Compound> ::= { <Statement List> }");
        self.expect_separator("{", "Expected '{' for compound statement")?;
        self.statement_list()?;
        self.expect_separator("}", "Expected '}' for compound statement")?;
        Ok(())
    }

    /// `<Assign> ::= <Identifier> = <Expression> ;`
    ///
    /// The target is resolved before the right-hand side is translated, so
    /// `x = x + 1` reads and writes the same cell.
    fn assign(&mut self) -> Result<(), RatError> {
        self.production("<Assign> ::= <Identifier> = <Expression> ;");
        let target = self.expect_identifier("Expected identifier for assignment")?;
        let address = self.address_of(&target)?;

        self.expect(TokenKind::Operator, Some("="), "Expected '=' for assignment")?;
        self.expression()?;
        self.emit(Opcode::Popm, Some(address));

        self.expect_separator(";", "Expected ';' after assignment expression")?;
        Ok(())
    }

    /// `<If> ::= if ( <Condition> ) <Statement> <If_Tail>`
    ///
    /// ```text
    ///         <condition>
    ///         JUMPZ  else_or_end      ← placeholder, pushed
    ///         <then>
    ///         JUMP   end              ← only with else
    /// else:   <else>
    /// end:
    /// ```
    fn if_statement(&mut self) -> Result<(), RatError> {
        self.production("<If> ::= if ( <Condition> ) <Statement> <If_Tail>");
        self.expect_keyword("if", "Expected 'if'")?;
        self.expect_separator("(", "Expected '(' after 'if'")?;
        self.condition()?;
        self.expect_separator(")", "Expected ')' after condition")?;

        let skip_then = self.emit(Opcode::Jumpz, None);
        self.defer(skip_then);

        self.statement()?;
        self.if_tail()
    }

    /// `<If_Tail> ::= else <Statement> fi | fi`
    fn if_tail(&mut self) -> Result<(), RatError> {
        if self.match_keyword("else") {
            self.production("<If_Tail> ::= else <Statement> fi");

            // The then-branch ends by jumping over the else-branch. The
            // pending JUMPZ is resolved first (it sits on top of the stack),
            // then the new JUMP takes its place.
            let skip_else = self.emit(Opcode::Jump, None);
            self.backpatch_to_next()?;
            self.defer(skip_else);

            self.statement()?;
            self.expect_keyword("fi", "Expected 'fi' after 'else' statement")?;
            self.backpatch_to_next()?;
            return Ok(());
        }

        if self.match_keyword("fi") {
            self.production("<If_Tail> ::= fi");
            return self.backpatch_to_next();
        }

        Err(self.error("Expected 'fi' or 'else'"))
    }

    /// `<Return> ::= return <Return_Tail>`
    fn return_statement(&mut self) -> Result<(), RatError> {
        self.production("<Return> ::= return <Return_Tail>");
        self.expect_keyword("return", "Expected 'return'")?;
        self.return_tail()
    }

    fn return_tail(&mut self) -> Result<(), RatError> {
        if self.check_separator(";") {
            self.production("<Return_Tail> ::= ;");
            self.match_separator(";");
            return Ok(());
        }

        self.production("<Return_Tail> ::= <Expression> ;");
        self.expression()?;
        self.expect_separator(";", "Expected ';' after return expression")?;
        Ok(())
    }

    /// `<Print> ::= put ( <Expression> );`
    fn print_statement(&mut self) -> Result<(), RatError> {
        self.production("<Print> ::= put ( <Expression> );");
        self.expect_keyword("put", "Expected 'put'")?;
        self.expect_separator("(", "Expected '(' after 'put'")?;
        self.expression()?;
        self.emit(Opcode::Stdout, None);
        self.expect_separator(")", "Expected ')' after expression in 'put'")?;
        self.expect_separator(";", "Expected ';' after 'put' statement")?;
        Ok(())
    }

    /// `<Scan> ::= get ( <IDs> );`
    ///
    /// Each identifier becomes `STDIN` followed by `POPM address`.
    fn scan(&mut self) -> Result<(), RatError> {
        self.production("<Scan> ::= get ( <IDs> );");
        self.expect_keyword("get", "Expected 'get'")?;
        self.expect_separator("(", "Expected '(' after 'get'")?;
        self.ids(IdAction::Scan)?;
        self.expect_separator(")", "Expected ')' after IDs in 'get'")?;
        self.expect_separator(";", "Expected ';' after 'get' statement")?;
        Ok(())
    }

    /// `<While> ::= while ( <Condition> ) <Statement>`
    ///
    /// ```text
    /// start:  LABEL
    ///         <condition>
    ///         JUMPZ  end              ← placeholder, pushed
    ///         <body>
    ///         JUMP   start
    /// end:
    /// ```
    fn while_statement(&mut self) -> Result<(), RatError> {
        self.production("<While> ::= while ( <Condition> ) <Statement>");

        // Taken before the condition, so every iteration re-evaluates it.
        let loop_start = self.emit(Opcode::Label, None);

        self.expect_keyword("while", "Expected 'while'")?;
        self.expect_separator("(", "Expected '(' after 'while'")?;
        self.condition()?;
        self.expect_separator(")", "Expected ')' after condition in 'while'")?;

        let exit = self.emit(Opcode::Jumpz, None);
        self.defer(exit);

        self.statement()?;

        self.emit(Opcode::Jump, Some(loop_start as i64));
        self.backpatch_to_next()
    }
}
