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

/// Core parser orchestration:
/// - Owns the `Parser` struct (the per-session parse context)
/// - Exposes the main `parse(tokens, options)` entry point
/// - Defines the `Artifacts` / `Failure` results
pub mod parser;

/// Program structure:
/// - `#` sections, function definitions, parameters
/// - declaration lists and identifier lists
pub mod program;

/// Statement-level parsing and translation:
/// - compound / assign / put / get / return
/// - if / while with backpatched jumps
pub mod statements;

/// Expression-level parsing and translation:
/// - condition → expression → term → factor → primary
pub mod expressions;

/// Shared parser helpers:
/// - token matching and lookahead
/// - semantic actions (emit, declare, resolve, backpatch)
pub mod helpers;

/// The production trace.
pub mod trace;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, Artifacts, Failure, Parser};
