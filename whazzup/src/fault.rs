// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use crate::Error;

/// The scope of a parse fault.
///
/// A [`Fatal`] fault drops exactly one input line; it never aborts the
/// section or file. An [`Advisory`] fault concerns the file as a whole and
/// drops nothing.
///
/// [`Fatal`]: Severity::Fatal
/// [`Advisory`]: Severity::Advisory
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    Fatal,
    Advisory,
}

/// A structured parse fault.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseFault {
    /// Name of the section the fault occurred in.
    pub section: String,
    /// The offending input line, or `None` for file level faults.
    pub raw_line: Option<String>,
    pub severity: Severity,
    pub message: String,
    /// The parser error behind a fatal fault.
    pub cause: Option<Error>,
}

impl ParseFault {
    /// Creates a fatal fault for one dropped line.
    pub fn fatal(section: &str, raw_line: &str, cause: Error) -> Self {
        Self {
            section: section.to_string(),
            raw_line: Some(raw_line.to_string()),
            severity: Severity::Fatal,
            message: cause.to_string(),
            cause: Some(cause),
        }
    }

    /// Creates an advisory fault scoped to the whole file.
    pub fn advisory(section: &str, message: String) -> Self {
        Self {
            section: section.to_string(),
            raw_line: None,
            severity: Severity::Advisory,
            message,
            cause: None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Display for ParseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw_line {
            Some(line) => write!(f, "[{}] {}: {line}", self.section, self.message),
            None => write!(f, "[{}] {}", self.section, self.message),
        }
    }
}

/// An append-only collection of [parse faults].
///
/// Faults are kept in the order they were recorded, which within a section
/// matches the input line order.
///
/// [parse faults]: ParseFault
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct FaultLog {
    faults: Vec<ParseFault>,
}

impl FaultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fault: ParseFault) {
        self.faults.push(fault);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseFault> {
        self.faults.iter()
    }

    pub fn as_slice(&self) -> &[ParseFault] {
        self.faults.as_slice()
    }

    pub fn len(&self) -> usize {
        self.faults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }
}
