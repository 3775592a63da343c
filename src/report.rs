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

//! Text and JSON renderings of the compilation artifacts.
//!
//! ```text
//! Assembly Code Listing
//! 1    PUSHI  10
//! 2    POPM   10000
//! 3    PUSHM  10000
//! 4    STDOUT
//!
//! Symbol Table
//! Identifier      MemoryLocation       Type
//! x               10000                integer
//! ```

use crate::codegen::{Instruction, SymbolEntry};
use crate::error::RatError;
use crate::parser::Artifacts;

/// One line per trace entry.
pub fn render_trace(trace: &[String]) -> String {
    let mut out = String::new();
    for line in trace {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// One instruction row, operand column blank when absent.
pub fn instruction_row(instr: &Instruction) -> String {
    let operand = instr.operand.map(|o| o.to_string()).unwrap_or_default();
    format!("{:<4} {:<6} {}", instr.address, instr.opcode.mnemonic(), operand)
        .trim_end()
        .to_string()
}

pub fn render_instructions(instructions: &[Instruction]) -> String {
    let mut out = String::from("Assembly Code Listing\n");
    for instr in instructions {
        out.push_str(&instruction_row(instr));
        out.push('\n');
    }
    out
}

pub fn symbol_row(entry: &SymbolEntry) -> String {
    format!(
        "{:<15} {:<20} {:<10}",
        entry.lexeme,
        entry.address,
        entry.declared_type.to_string()
    )
    .trim_end()
    .to_string()
}

pub fn render_symbols(symbols: &[SymbolEntry]) -> String {
    let mut out = String::from("Symbol Table\n");
    out.push_str(
        format!("{:<15} {:<20} {:<10}", "Identifier", "MemoryLocation", "Type").trim_end(),
    );
    out.push('\n');
    for entry in symbols {
        out.push_str(&symbol_row(entry));
        out.push('\n');
    }
    out
}

/// Instruction listing followed by the symbol table.
pub fn render_listing(artifacts: &Artifacts) -> String {
    format!(
        "{}\n{}",
        render_instructions(&artifacts.instructions),
        render_symbols(&artifacts.symbols)
    )
}

/// Full report for a successful run: trace (if recorded), then the listing
/// when code was generated.
pub fn render_report(artifacts: &Artifacts) -> String {
    let mut out = render_trace(&artifacts.trace);

    if artifacts.mode.generates_code() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_listing(artifacts));
    }

    out
}

/// A failed run is reported as its single error line.
pub fn render_failure(error: &RatError) -> String {
    format!("{}\n", error)
}

/// The artifacts as pretty-printed JSON.
pub fn to_json(artifacts: &Artifacts) -> Result<String, RatError> {
    serde_json::to_string_pretty(artifacts)
        .map_err(|e| RatError::io(format!("Failed to serialise artifacts: {}", e)))
}
