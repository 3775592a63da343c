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

//! Shared test utilities for the Rat25F integration tests.
//!
//! All tests follow the Arrange-Act-Assert pattern.

#![allow(dead_code)]

use std::collections::HashMap;

use rat25f::codegen::{Instruction, Opcode};
use rat25f::config::CompileOptions;
use rat25f::parser::{Artifacts, Failure};

// =============================================================================
// Compilation Helpers
// =============================================================================

/// Compile in code-generating mode.
///
/// # Panics
/// Panics if compilation fails, which is appropriate for test code.
pub fn compile(source: &str) -> Artifacts {
    rat25f::compile(source, &CompileOptions::default())
        .unwrap_or_else(|f| panic!("compilation failed: {}", f.error))
}

/// Compile in code-generating mode, expecting failure.
pub fn compile_err(source: &str) -> Failure {
    match rat25f::compile(source, &CompileOptions::default()) {
        Ok(_) => panic!("expected compilation of {:?} to fail", source),
        Err(failure) => failure,
    }
}

pub fn analyse(source: &str) -> Result<Artifacts, Failure> {
    rat25f::compile(source, &CompileOptions::syntax_only())
}

/// `(opcode, operand)` pairs, addresses dropped.
pub fn ops(artifacts: &Artifacts) -> Vec<(Opcode, Option<i64>)> {
    artifacts
        .instructions
        .iter()
        .map(|i| (i.opcode, i.operand))
        .collect()
}

// =============================================================================
// Reference Stack Machine
// =============================================================================

/// Executes generated code and returns everything written by `STDOUT`.
///
/// Uninitialised memory reads as 0 and arithmetic wraps. Execution stops
/// when the program counter runs past the last instruction.
///
/// # Panics
/// On stack underflow, a bad jump target, or after `step_limit` steps.
pub fn execute(instructions: &[Instruction], inputs: &[i64]) -> Vec<i64> {
    let step_limit = 100_000;
    let mut memory: HashMap<i64, i64> = HashMap::new();
    let mut stack: Vec<i64> = Vec::new();
    let mut inputs = inputs.iter().copied();
    let mut output = Vec::new();
    let mut pc = 1usize;

    for _ in 0..step_limit {
        let Some(instr) = instructions.get(pc - 1) else {
            return output;
        };
        assert_eq!(instr.address, pc);
        pc += 1;

        match instr.opcode {
            Opcode::Pushi => stack.push(instr.operand.unwrap()),
            Opcode::Pushm => {
                let value = *memory.get(&instr.operand.unwrap()).unwrap_or(&0);
                stack.push(value);
            }
            Opcode::Popm => {
                let value = pop(&mut stack);
                memory.insert(instr.operand.unwrap(), value);
            }
            Opcode::Stdin => stack.push(inputs.next().expect("ran out of input")),
            Opcode::Stdout => {
                let value = pop(&mut stack);
                output.push(value);
            }
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div => {
                let right = pop(&mut stack);
                let left = pop(&mut stack);
                stack.push(match instr.opcode {
                    Opcode::Add => left.wrapping_add(right),
                    Opcode::Sub => left.wrapping_sub(right),
                    Opcode::Mul => left.wrapping_mul(right),
                    _ => left.wrapping_div(right),
                });
            }
            Opcode::Equ | Opcode::Neq | Opcode::Grt | Opcode::Les | Opcode::Leq | Opcode::Geq => {
                let right = pop(&mut stack);
                let left = pop(&mut stack);
                let holds = match instr.opcode {
                    Opcode::Equ => left == right,
                    Opcode::Neq => left != right,
                    Opcode::Grt => left > right,
                    Opcode::Les => left < right,
                    Opcode::Leq => left <= right,
                    _ => left >= right,
                };
                stack.push(holds as i64);
            }
            Opcode::Jump => pc = jump_target(instr, instructions.len()),
            Opcode::Jumpz => {
                let target = jump_target(instr, instructions.len());
                if pop(&mut stack) == 0 {
                    pc = target;
                }
            }
            Opcode::Label => {}
        }
    }

    panic!("program did not halt within {} steps", step_limit);
}

fn pop(stack: &mut Vec<i64>) -> i64 {
    stack.pop().expect("evaluation stack underflow")
}

fn jump_target(instr: &Instruction, len: usize) -> usize {
    let target = instr
        .operand
        .unwrap_or_else(|| panic!("unpatched {} at {}", instr.opcode, instr.address));
    assert!(target >= 1 && target as usize <= len + 1, "jump target {} out of range", target);
    target as usize
}
