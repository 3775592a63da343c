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

use crate::error::RatError;

/// The fixed opcode vocabulary of the Rat25F stack machine.
///
/// Every operation implicitly pops its inputs from, and pushes its result
/// onto, the evaluation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Opcode {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Stack / memory
    Pushi,
    Pushm,
    Popm,

    // I/O
    Stdin,
    Stdout,

    // Relational, each leaves 1 or 0
    Equ,
    Neq,
    Grt,
    Les,
    Leq,
    Geq,

    // Control
    Jump,
    Jumpz,
    Label,
}

impl Opcode {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Pushi => "PUSHI",
            Opcode::Pushm => "PUSHM",
            Opcode::Popm => "POPM",
            Opcode::Stdin => "STDIN",
            Opcode::Stdout => "STDOUT",
            Opcode::Equ => "EQU",
            Opcode::Neq => "NEQ",
            Opcode::Grt => "GRT",
            Opcode::Les => "LES",
            Opcode::Leq => "LEQ",
            Opcode::Geq => "GEQ",
            Opcode::Jump => "JUMP",
            Opcode::Jumpz => "JUMPZ",
            Opcode::Label => "LABEL",
        }
    }

    /// Maps a Rat25F relational operator onto its comparison opcode.
    pub fn from_relop(op: &str) -> Option<Opcode> {
        match op {
            "==" => Some(Opcode::Equ),
            "!=" => Some(Opcode::Neq),
            ">" => Some(Opcode::Grt),
            "<" => Some(Opcode::Les),
            "<=" => Some(Opcode::Leq),
            "=>" => Some(Opcode::Geq),
            _ => None,
        }
    }

    /// Maps `+ - * /` onto the arithmetic opcodes.
    pub fn from_arith(op: &str) -> Option<Opcode> {
        match op {
            "+" => Some(Opcode::Add),
            "-" => Some(Opcode::Sub),
            "*" => Some(Opcode::Mul),
            "/" => Some(Opcode::Div),
            _ => None,
        }
    }

    pub fn is_jump(self) -> bool {
        matches!(self, Opcode::Jump | Opcode::Jumpz)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// One row of the instruction stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// 1-based position in the stream. Never changes once assigned.
    pub address: usize,
    pub opcode: Opcode,

    /// `None` while a forward jump waits to be backpatched, and for
    /// opcodes that take no operand.
    pub operand: Option<i64>,
}

/// Append-only, 1-indexed list of stack-machine instructions.
///
/// Addresses are implicit: the instruction at index `i` has address `i + 1`.
#[derive(Debug, Clone, Default)]
pub struct InstructionStream {
    instructions: Vec<Instruction>,
}

impl InstructionStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instruction and returns its address.
    pub fn emit(&mut self, opcode: Opcode, operand: Option<i64>) -> usize {
        let address = self.next_address();
        self.instructions.push(Instruction {
            address,
            opcode,
            operand,
        });
        address
    }

    /// The address the next `emit` will receive.
    pub fn next_address(&self) -> usize {
        self.instructions.len() + 1
    }

    /// Fills in the operand of a placeholder instruction.
    ///
    /// A placeholder is patched exactly once. Patching an address that does
    /// not exist, or one whose operand is already set, is an internal
    /// consistency failure.
    pub fn patch(&mut self, address: usize, operand: i64) -> Result<(), RatError> {
        let len = self.instructions.len();
        let instr = address
            .checked_sub(1)
            .and_then(|index| self.instructions.get_mut(index))
            .ok_or_else(|| {
                RatError::internal(format!(
                    "Backpatch error: invalid address {} (stream holds {} instructions)",
                    address, len
                ))
            })?;

        if let Some(existing) = instr.operand {
            return Err(RatError::internal(format!(
                "Backpatch error: {} at address {} already targets {}",
                instr.opcode, address, existing
            )));
        }

        instr.operand = Some(operand);
        Ok(())
    }

    pub fn into_vec(self) -> Vec<Instruction> {
        self.instructions
    }
}
