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

//! Instruction sequences for straight-line statements.

use rat25f::codegen::{DeclaredType, Opcode::*};
use rat25f::config::CompileOptions;

use crate::common::*;

// =============================================================================
// Declarations
// =============================================================================

mod declarations {
    use super::*;

    #[test]
    fn addresses_follow_declaration_order() {
        let artifacts = compile("# integer a, b; boolean done; integer c; put(a); #");

        let table: Vec<(&str, i64, DeclaredType)> = artifacts
            .symbols
            .iter()
            .map(|e| (e.lexeme.as_str(), e.address, e.declared_type))
            .collect();

        assert_eq!(
            table,
            vec![
                ("a", 10000, DeclaredType::Integer),
                ("b", 10001, DeclaredType::Integer),
                ("done", 10002, DeclaredType::Boolean),
                ("c", 10003, DeclaredType::Integer),
            ]
        );
    }

    #[test]
    fn memory_base_is_configurable() {
        let options = CompileOptions {
            memory_base: 200,
            ..CompileOptions::default()
        };
        let artifacts = rat25f::compile("# integer x; x = 1; #", &options).unwrap();

        assert_eq!(artifacts.symbols[0].address, 200);
        assert_eq!(ops(&artifacts), vec![(Pushi, Some(1)), (Popm, Some(200))]);
    }

    #[test]
    fn function_parameters_and_locals_share_the_flat_namespace() {
        let artifacts = compile(
            "function f(n integer) integer t; { t = n; }
             # integer x; x = 1; #",
        );

        let names: Vec<(&str, i64)> = artifacts
            .symbols
            .iter()
            .map(|e| (e.lexeme.as_str(), e.address))
            .collect();
        assert_eq!(names, vec![("n", 10000), ("t", 10001), ("x", 10002)]);

        assert_eq!(
            ops(&artifacts),
            vec![
                (Pushm, Some(10000)),
                (Popm, Some(10001)),
                (Pushi, Some(1)),
                (Popm, Some(10002)),
            ]
        );
    }
}

// =============================================================================
// Statements
// =============================================================================

mod statements {
    use super::*;

    #[test]
    fn assign_then_print() {
        // Arrange & Act
        let artifacts = compile("# integer x; x = 10; put(x); #");

        // Assert
        assert_eq!(artifacts.symbols.len(), 1);
        assert_eq!(artifacts.symbols[0].lexeme, "x");
        assert_eq!(artifacts.symbols[0].address, 10000);
        assert_eq!(artifacts.symbols[0].declared_type, DeclaredType::Integer);

        let addresses: Vec<usize> = artifacts.instructions.iter().map(|i| i.address).collect();
        assert_eq!(addresses, vec![1, 2, 3, 4]);
        assert_eq!(
            ops(&artifacts),
            vec![
                (Pushi, Some(10)),
                (Popm, Some(10000)),
                (Pushm, Some(10000)),
                (Stdout, None),
            ]
        );
    }

    #[test]
    fn self_referencing_assignment_uses_one_address() {
        let artifacts = compile("# integer x; x = x + 1; #");
        assert_eq!(
            ops(&artifacts),
            vec![(Pushm, Some(10000)), (Pushi, Some(1)), (Add, None), (Popm, Some(10000))]
        );
    }

    #[test]
    fn get_reads_each_identifier_in_turn() {
        let artifacts = compile("# integer a, b; get(a, b); #");
        assert_eq!(
            ops(&artifacts),
            vec![
                (Stdin, None),
                (Popm, Some(10000)),
                (Stdin, None),
                (Popm, Some(10001)),
            ]
        );
    }

    #[test]
    fn boolean_literals_push_one_and_zero() {
        let artifacts = compile("# boolean f; f = true; f = false; #");
        assert_eq!(
            ops(&artifacts),
            vec![
                (Pushi, Some(1)),
                (Popm, Some(10000)),
                (Pushi, Some(0)),
                (Popm, Some(10000)),
            ]
        );
    }

    #[test]
    fn return_translates_its_expression_only() {
        let artifacts = compile("# integer x; return x; return; #");
        assert_eq!(ops(&artifacts), vec![(Pushm, Some(10000))]);
    }

    #[test]
    fn compound_statements_translate_in_order() {
        let artifacts = compile("# integer x; { x = 1; { put(x); } } #");
        assert_eq!(
            ops(&artifacts),
            vec![(Pushi, Some(1)), (Popm, Some(10000)), (Pushm, Some(10000)), (Stdout, None)]
        );
    }
}

// =============================================================================
// Expressions
// =============================================================================

mod expressions {
    use super::*;

    #[test]
    fn operators_follow_their_operands() {
        let artifacts = compile("# integer a; a = 1 + 2 * 3 - -4; #");
        assert_eq!(
            ops(&artifacts),
            vec![
                (Pushi, Some(1)),
                (Pushi, Some(2)),
                (Pushi, Some(3)),
                (Mul, None),
                (Add, None),
                (Pushi, Some(0)),
                (Pushi, Some(4)),
                (Sub, None),
                (Sub, None),
                (Popm, Some(10000)),
            ]
        );
    }

    #[test]
    fn same_precedence_is_left_associative() {
        let artifacts = compile("# integer a; a = 8 / 4 / 2; put(a); #");
        assert_eq!(
            &ops(&artifacts)[..5],
            &[(Pushi, Some(8)), (Pushi, Some(4)), (Div, None), (Pushi, Some(2)), (Div, None)]
        );
        assert_eq!(execute(&artifacts.instructions, &[]), vec![1]);
    }

    #[test]
    fn parentheses_override_precedence() {
        let artifacts = compile("# integer a; a = (1 + 2) * 3; put(a); #");
        assert_eq!(
            &ops(&artifacts)[..5],
            &[(Pushi, Some(1)), (Pushi, Some(2)), (Add, None), (Pushi, Some(3)), (Mul, None)]
        );
        assert_eq!(execute(&artifacts.instructions, &[]), vec![9]);
    }

    #[test]
    fn unary_minus_on_identifier() {
        let artifacts = compile("# integer a, b; b = -a; #");
        assert_eq!(
            ops(&artifacts),
            vec![(Pushi, Some(0)), (Pushm, Some(10000)), (Sub, None), (Popm, Some(10001))]
        );
    }
}
