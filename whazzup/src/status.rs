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

use std::ops::RangeInclusive;

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::fault::{FaultLog, ParseFault};
use crate::fields::parse_timestamp;
use crate::records::{ClientParser, ClientRecord, ServerRecord, VoiceServerRecord};
use crate::section::Sections;
use crate::Error;

/// The closed range of supported declared format versions.
///
/// A version outside this range is advisory only; parsing proceeds with the
/// same rule set either way.
pub const SUPPORTED_VERSIONS: RangeInclusive<i32> = 8..=9;

/// Metadata from the GENERAL section.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GeneralSection {
    /// Declared format version, `-1` if absent or unreadable.
    pub version: i32,
    /// Timestamp the file was generated at.
    pub update: Option<NaiveDateTime>,
    /// Minimum minutes between data file retrievals, `-1` if absent.
    pub reload_minutes: i32,
    /// Minimum minutes between ATIS retrievals, `-1` if absent.
    pub atis_allow_minutes: i32,
    /// Declared number of connected clients, `-1` if absent.
    pub connected_clients: i32,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            version: -1,
            update: None,
            reload_minutes: -1,
            atis_allow_minutes: -1,
            connected_clients: -1,
        }
    }
}

impl GeneralSection {
    /// Extracts the key/value pairs of the GENERAL section.
    ///
    /// Unknown keys are skipped; malformed values fall back to their
    /// sentinel without fault.
    fn parse(lines: &[String]) -> Self {
        let mut general = Self::default();

        for line in lines {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();

            match key.trim().to_uppercase().as_str() {
                "VERSION" => general.version = value.parse().unwrap_or(-1),
                "RELOAD" => general.reload_minutes = value.parse().unwrap_or(-1),
                "UPDATE" => general.update = parse_timestamp("UPDATE", value).ok().flatten(),
                "ATIS ALLOW MIN" => general.atis_allow_minutes = value.parse().unwrap_or(-1),
                "CONNECTED CLIENTS" => general.connected_clients = value.parse().unwrap_or(-1),
                _ => {}
            }
        }

        general
    }
}

/// One fully parsed status file.
///
/// Records that failed to parse are dropped and show up in [`faults`]
/// instead; parsing itself never fails.
///
/// [`faults`]: StatusFile::faults
#[derive(Clone, PartialEq, Debug)]
pub struct StatusFile {
    pub general: GeneralSection,
    /// Client records, CLIENTS before PREFILE, each in input order.
    pub clients: Vec<ClientRecord>,
    pub servers: Vec<ServerRecord>,
    pub voice_servers: Vec<VoiceServerRecord>,
    faults: FaultLog,
}

impl StatusFile {
    /// Parses a whole status file from decoded text.
    ///
    /// A line that violates the record rules is dropped with a fatal fault;
    /// it never stops the section or the file. An unsupported declared
    /// format version is recorded as an advisory fault and parsing
    /// continues with the same rule set.
    pub fn parse(text: &str) -> Self {
        let sections = Sections::split(text);
        let mut faults = FaultLog::new();

        let general = GeneralSection::parse(sections.lines("GENERAL"));
        if general.version == -1 {
            advise(
                &mut faults,
                "status file declares no readable format version".to_string(),
            );
        } else if !SUPPORTED_VERSIONS.contains(&general.version) {
            advise(
                &mut faults,
                format!(
                    "format version {} is outside the supported range {}..={}",
                    general.version,
                    SUPPORTED_VERSIONS.start(),
                    SUPPORTED_VERSIONS.end()
                ),
            );
        }

        let online = ClientParser::new(false);
        let prefiled = ClientParser::new(true);

        let mut clients = Vec::new();
        parse_section(&sections, "CLIENTS", &mut faults, &mut clients, |line| {
            online.parse(line)
        });
        parse_section(&sections, "PREFILE", &mut faults, &mut clients, |line| {
            prefiled.parse(line)
        });

        let mut servers = Vec::new();
        parse_section(
            &sections,
            "SERVERS",
            &mut faults,
            &mut servers,
            ServerRecord::parse,
        );

        let mut voice_servers = Vec::new();
        parse_section(
            &sections,
            "VOICE SERVERS",
            &mut faults,
            &mut voice_servers,
            VoiceServerRecord::parse,
        );

        Self {
            general,
            clients,
            servers,
            voice_servers,
            faults,
        }
    }

    /// All faults recorded while parsing, in input order.
    pub fn faults(&self) -> &FaultLog {
        &self.faults
    }
}

fn advise(faults: &mut FaultLog, message: String) {
    let fault = ParseFault::advisory("GENERAL", message);
    warn!("{fault}");
    faults.push(fault);
}

// One failed line is dropped with a fault; it never stops the section.
fn parse_section<T>(
    sections: &Sections,
    name: &str,
    faults: &mut FaultLog,
    records: &mut Vec<T>,
    parse: impl Fn(&str) -> Result<T, Error>,
) {
    let lines = sections.lines(name);
    debug!("parsing {} lines of section {name}", lines.len());

    for line in lines {
        match parse(line) {
            Ok(record) => records.push(record),
            Err(cause) => {
                let fault = ParseFault::fatal(name, line, cause);
                warn!("{fault}");
                faults.push(fault);
            }
        }
    }
}
