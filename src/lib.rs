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

//! Rat25F single-pass compiler front end.
//!
//! A predictive recursive-descent parser that is also a syntax-directed
//! translator: while it recognises the program it fills a symbol table and
//! emits stack-machine instructions, backpatching forward jumps as their
//! targets become known.
//!
//! ```text
//! Source → lexer::tokenize → parser::parse → Artifacts → report
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod span;

use config::CompileOptions;
use parser::{Artifacts, Failure};

/// Scans and parses one source string.
///
/// A scanner error is reported as a `Failure` with empty partial artifacts.
pub fn compile(source: &str, options: &CompileOptions) -> Result<Artifacts, Failure> {
    let tokens = lexer::tokenize(source).map_err(|error| Failure {
        error,
        partial: Artifacts {
            mode: options.mode,
            trace: Vec::new(),
            instructions: Vec::new(),
            symbols: Vec::new(),
        },
    })?;

    parser::parse(tokens, options)
}
