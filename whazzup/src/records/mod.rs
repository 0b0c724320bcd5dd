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

//! The record types of the status file.

mod client;
mod server;
mod voice_server;

pub use client::{ClientParser, ClientRecord};
pub use server::ServerRecord;
pub use voice_server::VoiceServerRecord;

use crate::Error;

/// Splits a fixed-arity, colon terminated line into its fields.
pub(crate) fn split_exact(line: &str, expected: usize) -> Result<Vec<&str>, Error> {
    let mut fields: Vec<&str> = line.split(':').collect();

    match fields.pop() {
        Some("") if fields.len() == expected => Ok(fields),
        _ => Err(Error::MalformedLine {
            expected,
            actual: line.matches(':').count(),
        }),
    }
}
