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

/// Opcodes, instructions and the append-only instruction stream.
pub mod instruction;

/// Pending forward-jump addresses.
pub mod backpatch;

/// Declared identifiers and their memory addresses.
pub mod symbols;

pub use backpatch::BackpatchStack;
pub use instruction::{Instruction, InstructionStream, Opcode};
pub use symbols::{DeclaredType, Qualifier, SymbolEntry, SymbolTable, DEFAULT_MEMORY_BASE};
