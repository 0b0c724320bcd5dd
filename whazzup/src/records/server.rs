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

/// An FSD server endpoint from the SERVERS section.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ServerRecord {
    pub id: String,
    /// Hostname or IP address.
    pub address: String,
    /// Physical server location as free text.
    pub location: String,
    pub name: String,
    /// Whether clients may connect to this server.
    ///
    /// Assumption, unverified against the live format: any non-zero flag
    /// value counts as accepting clients.
    pub accepts_clients: bool,
}

impl ServerRecord {
    /// Parses one SERVERS line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not have 5 colon terminated fields
    /// or the connection flag is not an integer.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let fields = super::split_exact(line, FIELD_COUNT)?;

        Ok(Self {
            id: fields[0].to_string(),
            address: fields[1].to_string(),
            location: fields[2].to_string(),
            name: fields[3].to_string(),
            accepts_clients: int_or("clients_connection_allowed", fields[4], 0)? != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_line() {
        let server = ServerRecord::parse("GERMANY1:178.32.74.141:Frankfurt:Germany 1:1:")
            .expect("server line should parse");

        assert_eq!(server.id, "GERMANY1");
        assert_eq!(server.address, "178.32.74.141");
        assert_eq!(server.location, "Frankfurt");
        assert_eq!(server.name, "Germany 1");
        assert!(server.accepts_clients);
    }

    #[test]
    fn zero_flag_refuses_clients() {
        let server = ServerRecord::parse("X:host:loc:name:0:").expect("server line should parse");
        assert!(!server.accepts_clients);

        let server = ServerRecord::parse("X:host:loc:name::").expect("server line should parse");
        assert!(!server.accepts_clients);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(ServerRecord::parse("GERMANY1:178.32.74.141:Frankfurt:1:").is_err());
    }
}
