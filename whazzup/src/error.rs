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

use std::error;
use std::fmt;

use crate::fields::ClientRole;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The line does not match the record grammar.
    MalformedLine {
        expected: usize,
        actual: usize,
    },
    /// A field that is required for the record's role is empty.
    MissingField {
        field: &'static str,
        role: ClientRole,
    },
    /// A field carries a value that the record's role may not set.
    ForbiddenField {
        field: &'static str,
        role: ClientRole,
    },
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { expected, actual } => {
                write!(
                    f,
                    "line should have {expected} colon terminated fields but has {actual}"
                )
            }
            Self::MissingField { field, role } => {
                write!(f, "{field} is required for a {role} but is empty")
            }
            Self::ForbiddenField { field, role } => {
                write!(f, "{field} must not be set for a {role}")
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => {
                write!(f, "{field} is \"{value}\" but should be {expected}")
            }
            Self::UnknownVariant {
                field,
                value,
                expected,
            } => {
                write!(f, "found \"{value}\" in {field} but should be {expected}")
            }
        }
    }
}

impl error::Error for Error {}
