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

//! The fail-fast error taxonomy: one error per run, no recovery.

use rat25f::codegen::Opcode;
use rat25f::config::CompileOptions;
use rat25f::error::ErrorKind;

use crate::common::*;

// =============================================================================
// Semantic Errors
// =============================================================================

mod semantic {
    use super::*;

    #[test]
    fn duplicate_declaration_stops_before_any_code() {
        let failure = compile_err("# integer x, x; x = 1; #");

        assert_eq!(failure.error.kind, ErrorKind::DuplicateDeclaration);
        assert_eq!(
            failure.error.to_string(),
            "Parser error at line 1: Unexpected token 'x' of type IDENTIFIER. Identifier 'x' already declared."
        );
        assert!(failure.partial.instructions.is_empty());
        assert_eq!(failure.partial.symbols.len(), 1);
    }

    #[test]
    fn duplicate_across_declarations_and_types() {
        let failure = compile_err("# integer x; boolean x; #");
        assert_eq!(failure.error.kind, ErrorKind::DuplicateDeclaration);
    }

    #[test]
    fn undeclared_assignment_target() {
        let failure = compile_err("# integer x;\n y = 1; #");

        assert_eq!(failure.error.kind, ErrorKind::UndeclaredIdentifier);
        assert_eq!(failure.error.line(), Some(2));
        assert!(failure.error.message.contains("'y' not declared"));
    }

    #[test]
    fn undeclared_operand_keeps_code_emitted_so_far() {
        let failure = compile_err("# integer x; x = 1; put(x + z); #");

        assert_eq!(failure.error.kind, ErrorKind::UndeclaredIdentifier);
        assert_eq!(
            failure
                .partial
                .instructions
                .iter()
                .map(|i| i.opcode)
                .collect::<Vec<_>>(),
            vec![Opcode::Pushi, Opcode::Popm, Opcode::Pushm]
        );
    }

    #[test]
    fn undeclared_in_get() {
        let failure = compile_err("# integer a; get(a, b); #");
        assert_eq!(failure.error.kind, ErrorKind::UndeclaredIdentifier);
        assert_eq!(failure.error.token.as_ref().map(|t| t.lexeme.as_str()), Some("b"));
    }
}

// =============================================================================
// Unsupported Features
// =============================================================================

mod unsupported {
    use super::*;

    #[test]
    fn real_declaration() {
        let failure = compile_err("# real r; #");

        assert_eq!(failure.error.kind, ErrorKind::UnsupportedFeature);
        assert_eq!(failure.error.code, "R0005");
        assert!(failure.error.help.is_some());
    }

    #[test]
    fn function_call_in_expression() {
        let failure = compile_err("# integer x, f; x = f(x); #");

        assert_eq!(failure.error.kind, ErrorKind::UnsupportedFeature);
        assert_eq!(failure.error.token.as_ref().map(|t| t.lexeme.as_str()), Some("("));
    }

    #[test]
    fn call_is_refused_before_the_callee_is_looked_up() {
        let failure = compile_err("# integer x; x = g(x); #");
        assert_eq!(failure.error.kind, ErrorKind::UnsupportedFeature);
    }

    #[test]
    fn real_literal() {
        let failure = compile_err("# integer x; x = 2.5; #");
        assert_eq!(failure.error.kind, ErrorKind::UnsupportedFeature);
    }

    #[test]
    fn real_parameter() {
        let failure = compile_err("function f(r real) { return; } # integer x; x = 1; #");
        assert_eq!(failure.error.kind, ErrorKind::UnsupportedFeature);
    }
}

// =============================================================================
// Syntax Errors
// =============================================================================

mod syntax {
    use super::*;

    #[test]
    fn missing_semicolon_names_the_found_token() {
        let failure = compile_err("# integer x;\nx = 1\nput(x); #");

        assert_eq!(failure.error.kind, ErrorKind::Syntax);
        assert_eq!(
            failure.error.to_string(),
            "Parser error at line 3: Unexpected token 'put' of type KEYWORD. Expected ';' after assignment expression"
        );
    }

    #[test]
    fn missing_closing_marker_is_reported_at_end_of_file() {
        let failure = compile_err("# integer x; x = 1;");

        assert_eq!(
            failure.error.to_string(),
            "Parser error at end of file: Expected '#' at the end of the program"
        );
        assert_eq!(failure.error.line(), None);
    }

    #[test]
    fn missing_fi_leaves_jump_unpatched() {
        let failure = compile_err("# integer x; if (x > 1) put(x); #");

        assert_eq!(failure.error.kind, ErrorKind::Syntax);
        assert!(failure.error.message.contains("Expected 'fi' or 'else'"));

        let jumpz = &failure.partial.instructions[3];
        assert_eq!(jumpz.opcode, Opcode::Jumpz);
        assert_eq!(jumpz.operand, None);
    }

    #[test]
    fn tokens_after_the_closing_marker() {
        let failure = compile_err("# integer x; x = 1; # x");

        assert_eq!(failure.error.kind, ErrorKind::Syntax);
        assert!(failure.error.message.contains("end of input"));
    }

    #[test]
    fn empty_statement_list() {
        let failure = compile_err("# integer x; #");
        assert!(failure.error.message.contains("Invalid statement"));
    }

    #[test]
    fn missing_relational_operator() {
        let failure = compile_err("# integer x; while (x) x = 0; #");
        assert!(failure.error.message.contains("Expected relational operator"));
    }

    #[test]
    fn declaration_after_statements() {
        let failure = compile_err("# integer x; x = 1; integer y; #");
        assert_eq!(failure.error.kind, ErrorKind::Syntax);
    }

    #[test]
    fn integer_literal_out_of_range() {
        let failure = compile_err("# integer x; x = 99999999999999999999; #");
        assert_eq!(failure.error.kind, ErrorKind::Syntax);
        assert!(failure.error.message.contains("out of range"));
    }
}

// =============================================================================
// Lexical Errors
// =============================================================================

mod lexical {
    use super::*;

    #[test]
    fn unknown_character() {
        let failure = compile_err("# integer x;\n  x = @; #");

        assert_eq!(failure.error.kind, ErrorKind::Lexical);
        assert_eq!(
            failure.error.to_string(),
            "Lexer error at line 2, column 7: Unexpected character '@'"
        );
        assert!(failure.partial.trace.is_empty());
    }
}

mod partial_artifacts {
    use super::*;

    #[test]
    fn trace_is_kept_up_to_the_error() {
        let failure = compile_err("# integer x; x = ; #");

        let trace = &failure.partial.trace;
        assert!(trace.contains(&"Token: Operator, Lexeme: =".to_string()));
        assert!(trace.iter().all(|l| !l.contains("<Statement List'> ::=")));
        assert_eq!(failure.error.token.as_ref().map(|t| t.lexeme.as_str()), Some(";"));
    }
}

// =============================================================================
// Options
// =============================================================================

mod options {
    use super::*;

    #[test]
    fn memory_base_without_room_for_every_symbol() {
        let options = CompileOptions {
            memory_base: i64::MAX,
            ..CompileOptions::default()
        };

        let failure = rat25f::compile("# integer a, b; a = 1; #", &options).unwrap_err();

        assert_eq!(failure.error.kind, ErrorKind::Config);
        assert_eq!(failure.error.token.as_ref().map(|t| t.lexeme.as_str()), Some("b"));
        assert_eq!(failure.partial.symbols.len(), 1);
        assert_eq!(failure.partial.symbols[0].address, i64::MAX);
        assert!(failure.partial.instructions.is_empty());
    }
}
