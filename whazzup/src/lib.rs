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

//! Network status file ("whazzup") parser.
//!
//! Flight-simulation networks publish their current state as a periodically
//! regenerated, colon delimited status file listing connected pilots, ATC
//! stations, prefiled flight plans and the network's server endpoints. The
//! format is informally specified and routinely carries malformed user
//! input; this crate parses it with per line fault isolation so one bad
//! record never drops the rest of the file.
//!
//! The crate takes already decoded text; reading and character decoding the
//! conventionally single byte encoded source is the caller's job.
//!
//! # Examples
//!
//! Lets parse a status file with one connected pilot and print its
//! position:
//!
//! ```
//! use whazzup::StatusFile;
//!
//! let text = concat!(
//!     "; generated for testing\n",
//!     "!GENERAL:\n",
//!     "VERSION = 8\n",
//!     "!CLIENTS:\n",
//!     "DLH123:1234567:John Doe EDDF:PILOT::50.0333:8.5706:34000:450:B744/H:480:\
//!      EDDF:FL340:KJFK:SERVER1:100:1:2200:::2:I:1230:1235:8:30:10:15:EGLL::\
//!      ANEKI UZ29 NIK UL610 LAM:0:0:0:0:::20140326190000:270:29.92:1013:\n",
//! );
//!
//! let status = StatusFile::parse(text);
//!
//! for client in &status.clients {
//!     // => "DLH123 at 50.0333, 8.5706"
//!     println!("{} at {}, {}", client.callsign, client.latitude, client.longitude);
//! }
//! # assert_eq!(status.clients.len(), 1);
//! # assert!(status.faults().is_empty());
//! ```
//!
//! Records that violate the format's field rules are dropped and recorded
//! as [faults] instead; [`StatusFile::parse`] itself never fails.
//!
//! [faults]: StatusFile::faults

mod error;
mod fault;
mod grammar;
mod section;
mod status;

pub mod fields;
pub mod records;

pub use error::Error;
pub use fault::{FaultLog, ParseFault, Severity};
pub use grammar::{Fields, LineGrammar, FIELD_COUNT};
pub use section::{RawSection, Sections};
pub use status::{GeneralSection, StatusFile, SUPPORTED_VERSIONS};
