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

use crate::fields::int_or;
use crate::Error;

const FIELD_COUNT: usize = 5;

/// A voice server endpoint from the VOICE SERVERS section.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VoiceServerRecord {
    /// Hostname or IP address.
    pub address: String,
    /// Physical server location as free text.
    pub location: String,
    pub name: String,
    /// See [`ServerRecord::accepts_clients`](super::ServerRecord).
    pub accepts_clients: bool,
    /// Raw voice server type, kept verbatim.
    pub raw_type: String,
}

impl VoiceServerRecord {
    /// Parses one VOICE SERVERS line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not have 5 colon terminated fields
    /// or the connection flag is not an integer.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let fields = super::split_exact(line, FIELD_COUNT)?;

        Ok(Self {
            address: fields[0].to_string(),
            location: fields[1].to_string(),
            name: fields[2].to_string(),
            accepts_clients: int_or("clients_connection_allowed", fields[3], 0)? != 0,
            raw_type: fields[4].to_string(),
        })
    }
}
