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

//! Program structure: the `#`-delimited sections, function definitions,
//! parameter and declaration lists, and identifier lists.

use crate::codegen::{Opcode, Qualifier};
use crate::error::RatError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

/// What to do with each identifier of an `<IDs>` list as it is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdAction {
    /// Declaration list: enter each name into the symbol table.
    Declare(Qualifier),

    /// `get ( <IDs> )`: read a value from input into each name.
    Scan,

    /// Parameters and call arguments: just collect the names.
    Collect,
}

impl Parser {
    /// `<Rat25F> ::= <Opt Function Definitions> # <Opt Declaration List> <Statement List> #`
    pub fn rat25f(&mut self) -> Result<(), RatError> {
        self.production(
            "<Rat25F> ::= <Opt Function Definitions> # <Opt Declaration List> <Statement List> #",
        );
        self.opt_function_definitions()?;
        self.expect_separator("#", "Expected '#' after function definitions")?;
        self.opt_declaration_list()?;
        self.statement_list()?;
        self.expect_separator("#", "Expected '#' at the end of the program")?;
        Ok(())
    }

    fn opt_function_definitions(&mut self) -> Result<(), RatError> {
        if self.check_keyword("function") {
            self.production("<Opt Function Definitions> ::= <Function Definitions>");
            self.function_definitions()
        } else {
            self.production("<Opt Function Definitions> ::= <Empty>");
            Ok(())
        }
    }

    fn function_definitions(&mut self) -> Result<(), RatError> {
        self.production("<Function Definitions> ::= <Function> <Function Definitions'>");
        self.function()?;
        self.function_definitions_prime()
    }

    fn function_definitions_prime(&mut self) -> Result<(), RatError> {
        while self.check_keyword("function") {
            self.production("<Function Definitions'> ::= <Function> <Function Definitions'>");
            self.function()?;
        }
        self.production("<Function Definitions'> ::= <Empty>");
        Ok(())
    }

    /// `<Function> ::= function <Identifier> ( <Opt Parameter List> ) <Opt Declaration List> <Body>`
    ///
    /// In code-generating mode parameters and local declarations share the
    /// program's single flat namespace and the body is translated inline.
    fn function(&mut self) -> Result<(), RatError> {
        self.production(
            "<Function> ::= function <Identifier> ( <Opt Parameter List> ) <Opt Declaration List> <Body>",
        );
        self.expect_keyword("function", "Expected 'function'")?;
        self.expect_identifier("Expected identifier after 'function'")?;
        self.expect_separator("(", "Expected '(' after function identifier")?;
        self.opt_parameter_list()?;
        self.expect_separator(")", "Expected ')' after parameter list")?;
        self.opt_declaration_list()?;
        self.body()
    }

    fn opt_parameter_list(&mut self) -> Result<(), RatError> {
        if self.check_kind(TokenKind::Identifier) {
            self.production("<Opt Parameter List> ::= <Parameter List>");
            self.parameter_list()
        } else {
            self.production("<Opt Parameter List> ::= <Empty>");
            Ok(())
        }
    }

    fn parameter_list(&mut self) -> Result<(), RatError> {
        self.production("<Parameter List> ::= <Parameter> <Parameter List'>");
        self.parameter()?;
        self.parameter_list_prime()
    }

    fn parameter_list_prime(&mut self) -> Result<(), RatError> {
        while self.match_separator(",") {
            self.production("<Parameter List'> ::= , <Parameter> <Parameter List'>");
            self.parameter()?;
        }
        self.production("<Parameter List'> ::= <Empty>");
        Ok(())
    }

    /// `<Parameter> ::= <IDs> <Qualifier>`
    ///
    /// The type follows the names, so they are declared only once the
    /// qualifier has been read.
    fn parameter(&mut self) -> Result<(), RatError> {
        self.production("<Parameter> ::= <IDs> <Qualifier>");
        let names = self.ids(IdAction::Collect)?;
        let qualifier = self.qualifier()?;
        for name in &names {
            self.declare(name, qualifier)?;
        }
        Ok(())
    }

    /// `<Qualifier> ::= integer | boolean | real`
    fn qualifier(&mut self) -> Result<Qualifier, RatError> {
        self.production("<Qualifier> ::= integer | boolean | real");

        if self.generates_code() && self.check_keyword("real") {
            let token = self.tokens[self.current].clone();
            return Err(RatError::unsupported(
                "Type 'real' is not allowed in code generation",
                &token,
            )
            .with_help("declare the variable as 'integer' or 'boolean'"));
        }

        for (word, qualifier) in [
            ("integer", Qualifier::Integer),
            ("boolean", Qualifier::Boolean),
            ("real", Qualifier::Real),
        ] {
            if self.match_keyword(word) {
                return Ok(qualifier);
            }
        }

        Err(self.error("Expected a qualifier (integer, boolean, real)"))
    }

    /// `<Body> ::= { <Statement List> }`
    fn body(&mut self) -> Result<(), RatError> {
        self.production("<Body> ::= { <Statement List> }");
        self.expect_separator("{", "Expected '{' for body")?;
        self.statement_list()?;
        self.expect_separator("}", "Expected '}' for body")?;
        Ok(())
    }

    fn opt_declaration_list(&mut self) -> Result<(), RatError> {
        if self.check_qualifier() {
            self.production("<Opt Declaration List> ::= <Declaration List>");
            self.declaration_list()
        } else {
            self.production("<Opt Declaration List> ::= <Empty>");
            Ok(())
        }
    }

    fn declaration_list(&mut self) -> Result<(), RatError> {
        self.production("<Declaration List> ::= <Declaration> ; <Declaration List'>");
        self.declaration()?;
        self.expect_separator(";", "Expected ';' after declaration")?;
        self.declaration_list_prime()
    }

    fn declaration_list_prime(&mut self) -> Result<(), RatError> {
        while self.check_qualifier() {
            self.production("<Declaration List'> ::= <Declaration> ; <Declaration List'>");
            self.declaration()?;
            self.expect_separator(";", "Expected ';' after declaration")?;
        }
        self.production("<Declaration List'> ::= <Empty>");
        Ok(())
    }

    /// `<Declaration> ::= <Qualifier> <IDs>`
    fn declaration(&mut self) -> Result<(), RatError> {
        self.production("<Declaration> ::= <Qualifier> <IDs>");
        let qualifier = self.qualifier()?;
        self.ids(IdAction::Declare(qualifier))?;
        Ok(())
    }

    /// `<IDs> ::= <Identifier> <IDs'>`
    ///
    /// `action` runs on each identifier right after it is matched, so a
    /// duplicate or undeclared name stops the parse before the rest of the
    /// list is read.
    pub fn ids(&mut self, action: IdAction) -> Result<Vec<Token>, RatError> {
        self.production("<IDs> ::= <Identifier> <IDs'>");
        let first = self.expect_identifier("Expected identifier")?;
        self.apply_id_action(&first, action)?;

        let mut names = vec![first];
        self.ids_prime(action, &mut names)?;
        Ok(names)
    }

    fn ids_prime(&mut self, action: IdAction, names: &mut Vec<Token>) -> Result<(), RatError> {
        while self.match_separator(",") {
            self.production("<IDs'> ::= , <Identifier> <IDs'>");
            let name = self.expect_identifier("Expected identifier after ','")?;
            self.apply_id_action(&name, action)?;
            names.push(name);
        }
        self.production("<IDs'> ::= <Empty>");
        Ok(())
    }

    fn apply_id_action(&mut self, name: &Token, action: IdAction) -> Result<(), RatError> {
        match action {
            IdAction::Declare(qualifier) => self.declare(name, qualifier),
            IdAction::Scan => {
                let address = self.address_of(name)?;
                self.emit(Opcode::Stdin, None);
                self.emit(Opcode::Popm, Some(address));
                Ok(())
            }
            IdAction::Collect => Ok(()),
        }
    }
}
