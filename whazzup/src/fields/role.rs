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

/// The role a client record represents.
///
/// A record carries two roles: the raw role derived from the literal client
/// type token and the effective role after heuristic correction of
/// ambiguous records. They may differ; which fields a record may legally set
/// is governed by the effective role unless noted otherwise.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ClientRole {
    /// A connected air-traffic-control station.
    AtcConnected,
    /// A connected pilot.
    PilotConnected,
    /// A pilot's prefiled flight plan; the client is not connected.
    PilotPrefiled,
    /// The client type token resolves to no known role.
    Unknown,
}

impl ClientRole {
    /// Resolves the literal client type token.
    ///
    /// Online sections tag their records `PILOT` or `ATC`; prefilings carry
    /// no tag at all, so in a prefile section only the empty token is known.
    pub fn from_token(token: &str, prefile: bool) -> Self {
        if prefile {
            match token {
                "" => Self::PilotPrefiled,
                _ => Self::Unknown,
            }
        } else {
            match token {
                "PILOT" => Self::PilotConnected,
                "ATC" => Self::AtcConnected,
                _ => Self::Unknown,
            }
        }
    }

    /// Returns `true` if the role describes a connected client.
    pub fn is_online(self) -> bool {
        matches!(self, Self::AtcConnected | Self::PilotConnected)
    }
}

impl fmt::Display for ClientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AtcConnected => "connected ATC station",
            Self::PilotConnected => "connected pilot",
            Self::PilotPrefiled => "prefiled pilot",
            Self::Unknown => "client of unknown role",
        };

        write!(f, "{name}")
    }
}
