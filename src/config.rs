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

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codegen::DEFAULT_MEMORY_BASE;
use crate::error::RatError;

/// Which flavour of the front end to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Pure syntax analysis over the full grammar. Functions, `real`
    /// and call-style primaries are accepted; only the trace is produced.
    SyntaxOnly,

    /// Syntax-directed translation into stack-machine code.
    #[default]
    CodeGen,
}

impl Mode {
    pub fn generates_code(self) -> bool {
        self == Mode::CodeGen
    }
}

/// Options for one compilation.
///
/// Every field has a default, so an options file only needs to name the
/// settings it changes:
///
/// ```json
/// { "mode": "syntax_only", "memory_base": 5000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    pub mode: Mode,

    /// Address given to the first declared identifier.
    pub memory_base: i64,

    /// Record the production trace. Turning it off leaves `trace` empty.
    pub trace: bool,

    /// Print timestamped progress lines on stderr.
    pub verbose: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            mode: Mode::CodeGen,
            memory_base: DEFAULT_MEMORY_BASE,
            trace: true,
            verbose: false,
        }
    }
}

impl CompileOptions {
    pub fn syntax_only() -> Self {
        Self {
            mode: Mode::SyntaxOnly,
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, RatError> {
        serde_json::from_str(text).map_err(|e| RatError::config(format!("Invalid options: {}", e)))
    }

    /// Reads an options file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RatError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            RatError::config(format!("Failed to read options file '{}': {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }
}
