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

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::RatError;
use crate::lexer::token::Token;

/// First memory address handed out to a declared identifier.
pub const DEFAULT_MEMORY_BASE: i64 = 10000;

/// A type written in a `<Qualifier>` position.
///
/// The grammar accepts all three; only `integer` and `boolean` have storage
/// in the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Integer,
    Boolean,
    Real,
}

impl Qualifier {
    pub fn from_keyword(word: &str) -> Option<Qualifier> {
        match word {
            "integer" => Some(Qualifier::Integer),
            "boolean" => Some(Qualifier::Boolean),
            "real" => Some(Qualifier::Real),
            _ => None,
        }
    }

    /// The storage type, or `None` for `real`.
    pub fn declared_type(self) -> Option<DeclaredType> {
        match self {
            Qualifier::Integer => Some(DeclaredType::Integer),
            Qualifier::Boolean => Some(DeclaredType::Boolean),
            Qualifier::Real => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    Integer,
    Boolean,
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Integer => write!(f, "integer"),
            DeclaredType::Boolean => write!(f, "boolean"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    pub lexeme: String,
    pub address: i64,
    pub declared_type: DeclaredType,
}

/// Flat, single-namespace symbol table.
///
/// Entries are kept in declaration order (for the listing) and indexed by
/// lexeme (for lookup). Nothing is ever removed or rewritten.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: HashMap<String, usize>,
    base: i64,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_base(DEFAULT_MEMORY_BASE)
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: i64) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            base,
        }
    }

    /// Records a new identifier and allocates the next memory address.
    pub fn declare(&mut self, token: &Token, declared_type: DeclaredType) -> Result<i64, RatError> {
        if self.index.contains_key(&token.lexeme) {
            return Err(RatError::duplicate_declaration(token));
        }

        // A base too close to `i64::MAX` runs out of addresses.
        let address = i64::try_from(self.entries.len())
            .ok()
            .and_then(|offset| self.base.checked_add(offset))
            .ok_or_else(|| {
                RatError::config(format!(
                    "Memory base {} leaves no address for '{}'",
                    self.base, token.lexeme
                ))
                .at(token)
            })?;

        self.index.insert(token.lexeme.clone(), self.entries.len());
        self.entries.push(SymbolEntry {
            lexeme: token.lexeme.clone(),
            address,
            declared_type,
        });

        Ok(address)
    }

    /// Looks up a previously declared identifier.
    pub fn resolve(&self, token: &Token) -> Result<&SymbolEntry, RatError> {
        self.get(&token.lexeme)
            .ok_or_else(|| RatError::undeclared_identifier(token))
    }

    fn get(&self, lexeme: &str) -> Option<&SymbolEntry> {
        self.index.get(lexeme).map(|&i| &self.entries[i])
    }

    pub fn into_entries(self) -> Vec<SymbolEntry> {
        self.entries
    }
}
