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

use chrono::{NaiveDateTime, TimeDelta};

use crate::fields::{
    decode_message, filed_duration, float_or_nan, int_or, non_negative_int_or, parse_khz,
    parse_timestamp, present_and_non_zero, serves, ClientRole, ControllerRating, FacilityType,
};
use crate::grammar::{Fields, LineGrammar, FIELD_COUNT};
use crate::Error;

// 1-based field positions within the line grammar.
const CALLSIGN: usize = 1;
const CID: usize = 2;
const REAL_NAME: usize = 3;
const CLIENT_TYPE: usize = 4;
const FREQUENCY: usize = 5;
const LATITUDE: usize = 6;
const LONGITUDE: usize = 7;
const ALTITUDE: usize = 8;
const GROUND_SPEED: usize = 9;
const AIRCRAFT_TYPE: usize = 10;
const TAS_CRUISE: usize = 11;
const DEPARTURE_AIRPORT: usize = 12;
const FILED_ALTITUDE: usize = 13;
const DESTINATION_AIRPORT: usize = 14;
const SERVER_ID: usize = 15;
const PROTOCOL_VERSION: usize = 16;
const RATING: usize = 17;
const TRANSPONDER: usize = 18;
const FACILITY_TYPE: usize = 19;
const VISUAL_RANGE: usize = 20;
const FLIGHT_PLAN_REVISION: usize = 21;
const FLIGHT_PLAN_TYPE: usize = 22;
const DEPARTURE_TIME_PLANNED: usize = 23;
const DEPARTURE_TIME_ACTUAL: usize = 24;
const ENROUTE_HOURS: usize = 25;
const ENROUTE_MINUTES: usize = 26;
const FUEL_HOURS: usize = 27;
const FUEL_MINUTES: usize = 28;
const ALTERNATE_AIRPORT: usize = 29;
const REMARKS: usize = 30;
const ROUTE: usize = 31;
const DEPARTURE_AIRPORT_LATITUDE: usize = 32;
const DEPARTURE_AIRPORT_LONGITUDE: usize = 33;
const DESTINATION_AIRPORT_LATITUDE: usize = 34;
const DESTINATION_AIRPORT_LONGITUDE: usize = 35;
const ATIS_MESSAGE: usize = 36;
const ATIS_UPDATED_AT: usize = 37;
const LOGON_TIME: usize = 38;
const HEADING: usize = 39;
const QNH_INHG: usize = 40;
const QNH_HPA: usize = 41;

/// One parsed client record.
///
/// The record combines connected pilots, connected ATC stations and
/// prefiled flight plans; which fields carry data depends on the
/// [effective role]. Absent fields keep their documented sentinel: NaN for
/// coordinates and QNH inHg, `-1` for non-negative integers, the empty
/// string for free text and `None` for structured values.
///
/// [effective role]: ClientRecord::effective_role
#[derive(Clone, PartialEq, Debug)]
pub struct ClientRecord {
    pub callsign: String,
    /// Numeric member ID, `-1` if absent or unreadable.
    pub member_id: i32,
    pub real_name: String,

    /// Role as literally tagged in the file.
    pub raw_role: ClientRole,
    /// Role after heuristic correction of ambiguous records.
    pub effective_role: ClientRole,

    pub latitude: f64,
    pub longitude: f64,
    pub altitude_ft: i32,
    /// Ground speed in knots, `-1` if absent or zero.
    pub ground_speed_kt: i32,
    /// Heading in degrees, `-1` if absent; 360 is normalized to 0.
    pub heading: i32,

    /// Served frequency in kHz, `-1` if absent.
    pub served_frequency_khz: i32,
    pub facility: Option<FacilityType>,
    pub visual_range_nm: i32,
    /// Controller message with line break tokens decoded to `\n`.
    pub atis_message: String,
    pub atis_updated_at: Option<NaiveDateTime>,

    /// Identifier of the connected-to server, empty if offline.
    pub server_id: String,
    pub protocol_version: i32,
    pub rating: Option<ControllerRating>,
    /// Transponder code as filed, `-1` if absent.
    pub transponder_code: i32,
    pub logon_time: Option<NaiveDateTime>,

    pub aircraft_type: String,
    pub true_air_speed_kt: i32,
    pub departure_airport: String,
    pub destination_airport: String,
    pub alternate_airport: String,
    /// Filed altitude as free text, e.g. `FL340` or `34000`.
    pub filed_altitude: String,
    pub route: String,
    pub remarks: String,
    pub flight_plan_revision: i32,
    /// Raw flight plan type letter, e.g. `I` or `V`.
    pub flight_plan_type: String,
    /// Planned departure as the raw minute-of-day style token, `-1` absent.
    pub departure_time_planned: i32,
    pub departure_time_actual: i32,
    pub time_enroute: Option<TimeDelta>,
    pub time_fuel: Option<TimeDelta>,
    pub departure_airport_latitude: f64,
    pub departure_airport_longitude: f64,
    pub destination_airport_latitude: f64,
    pub destination_airport_longitude: f64,

    pub qnh_inhg: f64,
    pub qnh_hpa: i32,
}

/// The client record parser of one section mode.
///
/// A parser is configured once for either an online section (CLIENTS) or a
/// prefile section (PREFILE) and is immutable afterwards, so it can be
/// shared across threads. Parsing both section kinds takes two separately
/// configured instances.
#[derive(Clone, Debug)]
pub struct ClientParser {
    grammar: LineGrammar,
    prefile: bool,
}

impl ClientParser {
    pub fn new(prefile: bool) -> Self {
        Self {
            grammar: LineGrammar::new(),
            prefile,
        }
    }

    pub fn is_prefile(&self) -> bool {
        self.prefile
    }

    /// Parses one client line.
    ///
    /// Parsing is a pure function of the line and the configured section
    /// mode; it fails fast on the first field rule violation.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not match the 41 field grammar or
    /// if any field carries a value its role may not set.
    pub fn parse(&self, line: &str) -> Result<ClientRecord, Error> {
        let fields = self.grammar.fields(line).ok_or(Error::MalformedLine {
            expected: FIELD_COUNT,
            actual: line.matches(':').count(),
        })?;

        let raw_role = ClientRole::from_token(fields.get(CLIENT_TYPE), self.prefile);
        let role = self.effective_role(raw_role, &fields);
        let online = role.is_online();
        // Relaxes only the server/protocol presence checks below.
        let onlineness_changed = raw_role.is_online() != online;

        let callsign = fields.get(CALLSIGN);
        if callsign.is_empty() {
            return Err(Error::MissingField {
                field: "callsign",
                role,
            });
        }

        // never fatal, corrupted member IDs just become unavailable
        let member_id = fields
            .get(CID)
            .parse::<i32>()
            .ok()
            .filter(|&id| id >= 0)
            .unwrap_or(-1);

        let latitude = coordinate("latitude", fields.get(LATITUDE), role, online)?;
        let longitude = coordinate("longitude", fields.get(LONGITUDE), role, online)?;

        let altitude_ft = int_or("altitude", fields.get(ALTITUDE), 0)?;
        if !online && altitude_ft != 0 {
            return Err(Error::ForbiddenField {
                field: "altitude",
                role,
            });
        }

        let ground_speed_kt = non_negative_int_or("groundspeed", fields.get(GROUND_SPEED), -1)?;
        if ground_speed_kt > 0 && role != ClientRole::PilotConnected {
            return Err(Error::ForbiddenField {
                field: "groundspeed",
                role,
            });
        }
        // zero means not moving which the record keeps as unavailable
        let ground_speed_kt = if ground_speed_kt == 0 {
            -1
        } else {
            ground_speed_kt
        };

        let served_frequency_khz = parse_khz("frequency", fields.get(FREQUENCY))?;
        // Assumption, unverified against the live format: only ATC stations
        // legitimately serve a frequency below the placeholder band.
        if serves(served_frequency_khz) && role != ClientRole::AtcConnected {
            return Err(Error::ForbiddenField {
                field: "frequency",
                role,
            });
        }

        let server_id = fields.get(SERVER_ID);
        let protocol_raw = fields.get(PROTOCOL_VERSION);
        if !onlineness_changed {
            if online {
                if server_id.is_empty() {
                    return Err(Error::MissingField {
                        field: "server",
                        role,
                    });
                }
                if protocol_raw.is_empty() {
                    return Err(Error::MissingField {
                        field: "protrevision",
                        role,
                    });
                }
            } else {
                if !server_id.is_empty() {
                    return Err(Error::ForbiddenField {
                        field: "server",
                        role,
                    });
                }
                if !protocol_raw.is_empty() {
                    return Err(Error::ForbiddenField {
                        field: "protrevision",
                        role,
                    });
                }
            }
        }
        let protocol_version = non_negative_int_or("protrevision", protocol_raw, -1)?;

        let rating = self.rating(&fields, role)?;

        let transponder_code = non_negative_int_or("transponder", fields.get(TRANSPONDER), -1)?;
        if transponder_code > 0 && role != ClientRole::PilotConnected {
            return Err(Error::ForbiddenField {
                field: "transponder",
                role,
            });
        }

        // Facility and visual range go by the raw role: a station that is
        // heuristically reclassified as flying still declared them.
        let facility = facility(&fields, raw_role)?;
        let visual_range_nm = non_negative_int_or("visualrange", fields.get(VISUAL_RANGE), -1)?;
        if visual_range_nm > 0 && raw_role != ClientRole::AtcConnected {
            return Err(Error::ForbiddenField {
                field: "visualrange",
                role: raw_role,
            });
        }

        let revision_raw = fields.get(FLIGHT_PLAN_REVISION);
        if revision_raw.is_empty() && role == ClientRole::PilotPrefiled {
            return Err(Error::MissingField {
                field: "planned_revision",
                role,
            });
        }
        let flight_plan_revision = non_negative_int_or("planned_revision", revision_raw, -1)?;

        let departure_time_planned =
            int_or("planned_deptime", fields.get(DEPARTURE_TIME_PLANNED), -1)?;
        let departure_time_actual =
            int_or("planned_actdeptime", fields.get(DEPARTURE_TIME_ACTUAL), -1)?;

        let time_enroute = filed_duration(
            "planned_hrsenroute",
            fields.get(ENROUTE_HOURS),
            "planned_minenroute",
            fields.get(ENROUTE_MINUTES),
        )?;
        if time_enroute.is_none() && role == ClientRole::PilotPrefiled {
            return Err(Error::MissingField {
                field: "planned_hrsenroute",
                role,
            });
        }

        let time_fuel = filed_duration(
            "planned_hrsfuel",
            fields.get(FUEL_HOURS),
            "planned_minfuel",
            fields.get(FUEL_MINUTES),
        )?;
        if time_fuel.is_none() && role == ClientRole::PilotPrefiled {
            return Err(Error::MissingField {
                field: "planned_hrsfuel",
                role,
            });
        }

        let atis_raw = fields.get(ATIS_MESSAGE);
        if !atis_raw.is_empty() && role != ClientRole::AtcConnected {
            return Err(Error::ForbiddenField {
                field: "atis_message",
                role,
            });
        }

        let atis_updated_at =
            parse_timestamp("time_last_atis_received", fields.get(ATIS_UPDATED_AT))?;
        if atis_updated_at.is_some() && role != ClientRole::AtcConnected {
            return Err(Error::ForbiddenField {
                field: "time_last_atis_received",
                role,
            });
        }

        let logon_time = parse_timestamp("time_logon", fields.get(LOGON_TIME))?;
        if online && logon_time.is_none() {
            return Err(Error::MissingField {
                field: "time_logon",
                role,
            });
        }

        let heading = self.heading(&fields, role)?;

        let mut qnh_inhg = float_or_nan("QNH_iHg", fields.get(QNH_INHG))?;
        if role != ClientRole::PilotConnected {
            if qnh_inhg == 0.0 {
                // zero is a harmless default
                qnh_inhg = f64::NAN;
            } else if !qnh_inhg.is_nan() {
                return Err(Error::ForbiddenField {
                    field: "QNH_iHg",
                    role,
                });
            }
        }

        let mut qnh_hpa = int_or("QNH_Mb", fields.get(QNH_HPA), -1)?;
        if role != ClientRole::PilotConnected {
            if qnh_hpa == 0 {
                qnh_hpa = -1;
            } else if qnh_hpa != -1 {
                return Err(Error::ForbiddenField {
                    field: "QNH_Mb",
                    role,
                });
            }
        }

        // never fatal, mirrors the member ID leniency
        let true_air_speed_kt = fields
            .get(TAS_CRUISE)
            .parse::<i32>()
            .ok()
            .filter(|&tas| tas >= 0)
            .unwrap_or(-1);

        Ok(ClientRecord {
            callsign: callsign.to_string(),
            member_id,
            real_name: fields.get(REAL_NAME).to_string(),
            raw_role,
            effective_role: role,
            latitude,
            longitude,
            altitude_ft,
            ground_speed_kt,
            heading,
            served_frequency_khz,
            facility,
            visual_range_nm,
            atis_message: decode_message(atis_raw),
            atis_updated_at,
            server_id: server_id.to_string(),
            protocol_version,
            rating,
            transponder_code,
            logon_time,
            aircraft_type: fields.get(AIRCRAFT_TYPE).to_string(),
            true_air_speed_kt,
            departure_airport: fields.get(DEPARTURE_AIRPORT).to_string(),
            destination_airport: fields.get(DESTINATION_AIRPORT).to_string(),
            alternate_airport: fields.get(ALTERNATE_AIRPORT).to_string(),
            filed_altitude: fields.get(FILED_ALTITUDE).to_string(),
            route: fields.get(ROUTE).to_string(),
            remarks: fields.get(REMARKS).to_string(),
            flight_plan_revision,
            flight_plan_type: fields.get(FLIGHT_PLAN_TYPE).to_string(),
            departure_time_planned,
            departure_time_actual,
            time_enroute,
            time_fuel,
            departure_airport_latitude: float_or_nan(
                "planned_depairport_lat",
                fields.get(DEPARTURE_AIRPORT_LATITUDE),
            )?,
            departure_airport_longitude: float_or_nan(
                "planned_depairport_lon",
                fields.get(DEPARTURE_AIRPORT_LONGITUDE),
            )?,
            destination_airport_latitude: float_or_nan(
                "planned_destairport_lat",
                fields.get(DESTINATION_AIRPORT_LATITUDE),
            )?,
            destination_airport_longitude: float_or_nan(
                "planned_destairport_lon",
                fields.get(DESTINATION_AIRPORT_LONGITUDE),
            )?,
            qnh_inhg,
            qnh_hpa,
        })
    }

    /// Applies the role inference for ambiguous online records.
    ///
    /// Stations that are actually flying and corrupted "ghost" records miss
    /// or mangle the client type token but still report movement data; any
    /// non-zero motion field forces the record to a connected pilot.
    fn effective_role(&self, raw_role: ClientRole, fields: &Fields) -> ClientRole {
        if self.prefile || raw_role != ClientRole::Unknown {
            return raw_role;
        }

        const MOTION: [usize; 5] = [HEADING, GROUND_SPEED, QNH_INHG, QNH_HPA, TRANSPONDER];
        if MOTION
            .iter()
            .any(|&position| present_and_non_zero(fields.get(position)))
        {
            ClientRole::PilotConnected
        } else {
            raw_role
        }
    }

    fn rating(&self, fields: &Fields, role: ClientRole) -> Result<Option<ControllerRating>, Error> {
        let raw = fields.get(RATING);

        if role == ClientRole::PilotPrefiled {
            return match int_or("rating", raw, 0)? {
                0 => Ok(None),
                _ => Err(Error::ForbiddenField {
                    field: "rating",
                    role,
                }),
            };
        }

        if raw.is_empty() {
            return Err(Error::MissingField {
                field: "rating",
                role,
            });
        }

        let rating = ControllerRating::from_id(int_or("rating", raw, 0)?)?;
        // pilots may never show an elevated ATC rating
        if role == ClientRole::PilotConnected && rating != ControllerRating::Observer {
            return Err(Error::InvalidValue {
                field: "rating",
                value: raw.to_string(),
                expected: "the observer rating for a connected pilot",
            });
        }

        Ok(Some(rating))
    }

    fn heading(&self, fields: &Fields, role: ClientRole) -> Result<i32, Error> {
        let raw = fields.get(HEADING);
        let heading = non_negative_int_or("heading", raw, -1)?;
        let heading = if heading == 360 { 0 } else { heading };

        if heading > 359 {
            return Err(Error::InvalidValue {
                field: "heading",
                value: raw.to_string(),
                expected: "a heading between 0 and 360",
            });
        }

        // zero is always legal as a harmless default
        if heading > 0 && role != ClientRole::PilotConnected {
            return Err(Error::ForbiddenField {
                field: "heading",
                role,
            });
        }

        Ok(heading)
    }
}

fn coordinate(
    field: &'static str,
    value: &str,
    role: ClientRole,
    online: bool,
) -> Result<f64, Error> {
    if !online && !value.is_empty() {
        return Err(Error::ForbiddenField { field, role });
    }

    float_or_nan(field, value)
}

fn facility(fields: &Fields, raw_role: ClientRole) -> Result<Option<FacilityType>, Error> {
    let raw = fields.get(FACILITY_TYPE);
    if raw.is_empty() {
        return Ok(None);
    }

    let id = int_or("facilitytype", raw, 0)?;
    if raw_role == ClientRole::AtcConnected {
        Ok(Some(FacilityType::from_id(id)?))
    } else if id == 0 {
        Ok(None)
    } else {
        Err(Error::ForbiddenField {
            field: "facilitytype",
            role: raw_role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(fields: &[&str; FIELD_COUNT]) -> String {
        let mut s = fields.join(":");
        s.push(':');
        s
    }

    fn pilot_fields() -> [&'static str; FIELD_COUNT] {
        [
            "DLH123",
            "1234567",
            "John Doe EDDF",
            "PILOT",
            "",
            "50.0333",
            "8.5706",
            "34000",
            "450",
            "B744/H",
            "480",
            "EDDF",
            "FL340",
            "KJFK",
            "SERVER1",
            "100",
            "1",
            "2200",
            "",
            "",
            "2",
            "I",
            "1230",
            "1235",
            "8",
            "30",
            "10",
            "15",
            "EGLL",
            "+VFPS+/V/RMK/TCAS",
            "ANEKI UZ29 NIK UL610 LAM",
            "0",
            "0",
            "0",
            "0",
            "",
            "",
            "20140326190000",
            "270",
            "29.92",
            "1013",
        ]
    }

    fn atc_fields() -> [&'static str; FIELD_COUNT] {
        [
            "EDDF_TWR",
            "7654321",
            "Jane Roe",
            "ATC",
            "118.500",
            "50.0264",
            "8.5431",
            "0",
            "",
            "",
            "",
            "",
            "",
            "",
            "SERVER1",
            "100",
            "5",
            "",
            "4",
            "50",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "Frankfurt Tower^§Information Q",
            "20140326200000",
            "20140326180000",
            "",
            "",
            "",
        ]
    }

    fn prefile_fields() -> [&'static str; FIELD_COUNT] {
        [
            "BAW42",
            "1122334",
            "Sam Smith",
            "",
            "",
            "",
            "",
            "",
            "",
            "A320",
            "420",
            "EGLL",
            "36000",
            "LEMD",
            "",
            "",
            "",
            "",
            "",
            "",
            "1",
            "I",
            "0900",
            "",
            "2",
            "15",
            "3",
            "30",
            "LEBL",
            "RMK/PREFILE",
            "DCT",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]
    }

    #[test]
    fn parses_connected_pilot() {
        let parser = ClientParser::new(false);
        let record = parser
            .parse(&line(&pilot_fields()))
            .expect("pilot line should parse");

        assert_eq!(record.callsign, "DLH123");
        assert_eq!(record.member_id, 1234567);
        assert_eq!(record.real_name, "John Doe EDDF");
        assert_eq!(record.raw_role, ClientRole::PilotConnected);
        assert_eq!(record.effective_role, ClientRole::PilotConnected);
        assert_eq!(record.latitude, 50.0333);
        assert_eq!(record.longitude, 8.5706);
        assert_eq!(record.altitude_ft, 34000);
        assert_eq!(record.ground_speed_kt, 450);
        assert_eq!(record.heading, 270);
        assert_eq!(record.served_frequency_khz, -1);
        assert_eq!(record.facility, None);
        assert_eq!(record.server_id, "SERVER1");
        assert_eq!(record.protocol_version, 100);
        assert_eq!(record.rating, Some(ControllerRating::Observer));
        assert_eq!(record.transponder_code, 2200);
        assert!(record.logon_time.is_some());
        assert_eq!(record.aircraft_type, "B744/H");
        assert_eq!(record.true_air_speed_kt, 480);
        assert_eq!(record.departure_airport, "EDDF");
        assert_eq!(record.filed_altitude, "FL340");
        assert_eq!(record.destination_airport, "KJFK");
        assert_eq!(record.alternate_airport, "EGLL");
        assert_eq!(record.route, "ANEKI UZ29 NIK UL610 LAM");
        assert_eq!(record.flight_plan_revision, 2);
        assert_eq!(record.flight_plan_type, "I");
        assert_eq!(record.departure_time_planned, 1230);
        assert_eq!(record.departure_time_actual, 1235);
        assert_eq!(record.time_enroute.map(|d| d.num_minutes()), Some(510));
        assert_eq!(record.time_fuel.map(|d| d.num_minutes()), Some(615));
        assert_eq!(record.qnh_inhg, 29.92);
        assert_eq!(record.qnh_hpa, 1013);
    }

    #[test]
    fn parses_connected_atc() {
        let parser = ClientParser::new(false);
        let record = parser
            .parse(&line(&atc_fields()))
            .expect("ATC line should parse");

        assert_eq!(record.callsign, "EDDF_TWR");
        assert_eq!(record.raw_role, ClientRole::AtcConnected);
        assert_eq!(record.effective_role, ClientRole::AtcConnected);
        assert_eq!(record.served_frequency_khz, 118_500);
        assert_eq!(record.facility, Some(FacilityType::Tower));
        assert_eq!(record.visual_range_nm, 50);
        assert_eq!(record.rating, Some(ControllerRating::Controller1));
        assert_eq!(record.atis_message, "Frankfurt Tower\nInformation Q");
        assert!(record.atis_updated_at.is_some());
        assert!(record.logon_time.is_some());
        assert_eq!(record.heading, -1);
        assert_eq!(record.ground_speed_kt, -1);
        assert!(record.qnh_inhg.is_nan());
        assert_eq!(record.qnh_hpa, -1);
    }

    #[test]
    fn parses_prefiling() {
        let parser = ClientParser::new(true);
        let record = parser
            .parse(&line(&prefile_fields()))
            .expect("prefile line should parse");

        assert_eq!(record.callsign, "BAW42");
        assert_eq!(record.raw_role, ClientRole::PilotPrefiled);
        assert_eq!(record.effective_role, ClientRole::PilotPrefiled);
        assert!(record.latitude.is_nan());
        assert!(record.longitude.is_nan());
        assert_eq!(record.altitude_ft, 0);
        assert_eq!(record.rating, None);
        assert_eq!(record.server_id, "");
        assert_eq!(record.protocol_version, -1);
        assert_eq!(record.logon_time, None);
        assert_eq!(record.flight_plan_revision, 1);
        assert_eq!(record.departure_time_planned, 900);
        assert_eq!(record.departure_time_actual, -1);
        assert_eq!(record.time_enroute.map(|d| d.num_minutes()), Some(135));
        assert_eq!(record.time_fuel.map(|d| d.num_minutes()), Some(210));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let parser = ClientParser::new(false);

        assert_eq!(
            parser.parse("DLH123:1234567:John Doe:PILOT:"),
            Err(Error::MalformedLine {
                expected: FIELD_COUNT,
                actual: 4,
            })
        );
    }

    #[test]
    fn missing_callsign_is_fatal() {
        let parser = ClientParser::new(false);
        let mut fields = pilot_fields();
        fields[CALLSIGN - 1] = "";

        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::MissingField {
                field: "callsign",
                role: ClientRole::PilotConnected,
            })
        );
    }

    #[test]
    fn member_id_is_lenient() {
        let parser = ClientParser::new(false);

        for cid in ["", "not-a-number", "-5"] {
            let mut fields = pilot_fields();
            fields[CID - 1] = cid;

            let record = parser.parse(&line(&fields)).expect("line should parse");
            assert_eq!(record.member_id, -1);
        }
    }

    #[test]
    fn heading_360_normalizes_to_zero() {
        let parser = ClientParser::new(false);
        let mut fields = pilot_fields();
        fields[HEADING - 1] = "360";

        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.heading, 0);
    }

    #[test]
    fn heading_above_359_is_fatal() {
        let parser = ClientParser::new(false);

        for heading in ["361", "1080"] {
            let mut fields = pilot_fields();
            fields[HEADING - 1] = heading;

            assert!(parser.parse(&line(&fields)).is_err(), "heading {heading}");
        }
    }

    #[test]
    fn non_zero_heading_on_atc_is_fatal() {
        let parser = ClientParser::new(false);
        let mut fields = atc_fields();
        fields[HEADING - 1] = "90";

        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "heading",
                role: ClientRole::AtcConnected,
            })
        );
    }

    #[test]
    fn zero_heading_is_always_legal() {
        let parser = ClientParser::new(false);
        let mut fields = atc_fields();
        fields[HEADING - 1] = "0";

        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.heading, 0);
    }

    #[test]
    fn prefiled_position_is_fatal() {
        let parser = ClientParser::new(true);

        let mut fields = prefile_fields();
        fields[LATITUDE - 1] = "50.0333";
        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "latitude",
                role: ClientRole::PilotPrefiled,
            })
        );

        let mut fields = prefile_fields();
        fields[ALTITUDE - 1] = "34000";
        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "altitude",
                role: ClientRole::PilotPrefiled,
            })
        );
    }

    #[test]
    fn prefiled_explicit_zero_altitude_is_legal() {
        let parser = ClientParser::new(true);
        let mut fields = prefile_fields();
        fields[ALTITUDE - 1] = "0";

        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.altitude_ft, 0);
    }

    #[test]
    fn ghost_record_is_rescued_as_pilot() {
        let parser = ClientParser::new(false);
        let mut fields = pilot_fields();
        fields[CLIENT_TYPE - 1] = "";
        // the connection data of a ghost record may be gone as well
        fields[SERVER_ID - 1] = "";
        fields[PROTOCOL_VERSION - 1] = "";

        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.raw_role, ClientRole::Unknown);
        assert_eq!(record.effective_role, ClientRole::PilotConnected);
        assert_eq!(record.server_id, "");
        assert_eq!(record.protocol_version, -1);
    }

    #[test]
    fn motionless_unknown_stays_unknown() {
        let parser = ClientParser::new(false);
        let mut fields = [""; FIELD_COUNT];
        fields[CALLSIGN - 1] = "GHOST";
        fields[RATING - 1] = "1";

        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.raw_role, ClientRole::Unknown);
        assert_eq!(record.effective_role, ClientRole::Unknown);
        assert!(record.logon_time.is_none());
    }

    #[test]
    fn serving_frequency_on_pilot_is_fatal() {
        let parser = ClientParser::new(false);
        let mut fields = pilot_fields();
        fields[FREQUENCY - 1] = "122.800";

        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "frequency",
                role: ClientRole::PilotConnected,
            })
        );
    }

    #[test]
    fn placeholder_frequency_on_pilot_is_legal() {
        let parser = ClientParser::new(false);
        let mut fields = pilot_fields();
        fields[FREQUENCY - 1] = "199.998";

        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.served_frequency_khz, 199_998);
    }

    #[test]
    fn pilot_rating_must_be_observer() {
        let parser = ClientParser::new(false);
        let mut fields = pilot_fields();
        fields[RATING - 1] = "5";

        assert!(parser.parse(&line(&fields)).is_err());
    }

    #[test]
    fn unknown_rating_id_is_fatal() {
        let parser = ClientParser::new(false);
        let mut fields = atc_fields();
        fields[RATING - 1] = "13";

        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::UnknownVariant {
                field: "rating",
                value: "13".to_string(),
                expected: "a rating ID between 1 and 12",
            })
        );
    }

    #[test]
    fn prefiled_rating_must_be_absent_or_zero() {
        let parser = ClientParser::new(true);

        let mut fields = prefile_fields();
        fields[RATING - 1] = "0";
        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.rating, None);

        let mut fields = prefile_fields();
        fields[RATING - 1] = "1";
        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "rating",
                role: ClientRole::PilotPrefiled,
            })
        );
    }

    #[test]
    fn non_zero_transponder_on_atc_is_fatal() {
        let parser = ClientParser::new(false);
        let mut fields = atc_fields();
        fields[TRANSPONDER - 1] = "2000";

        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "transponder",
                role: ClientRole::AtcConnected,
            })
        );
    }

    #[test]
    fn facility_on_pilot_is_fatal() {
        let parser = ClientParser::new(false);

        let mut fields = pilot_fields();
        fields[FACILITY_TYPE - 1] = "4";
        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "facilitytype",
                role: ClientRole::PilotConnected,
            })
        );

        // zero is tolerated as absent
        let mut fields = pilot_fields();
        fields[FACILITY_TYPE - 1] = "0";
        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.facility, None);
    }

    #[test]
    fn unknown_facility_id_is_fatal() {
        let parser = ClientParser::new(false);
        let mut fields = atc_fields();
        fields[FACILITY_TYPE - 1] = "7";

        assert!(parser.parse(&line(&fields)).is_err());
    }

    #[test]
    fn prefiling_requires_revision_and_durations() {
        let parser = ClientParser::new(true);

        let mut fields = prefile_fields();
        fields[FLIGHT_PLAN_REVISION - 1] = "";
        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::MissingField {
                field: "planned_revision",
                role: ClientRole::PilotPrefiled,
            })
        );

        let mut fields = prefile_fields();
        fields[ENROUTE_HOURS - 1] = "";
        fields[ENROUTE_MINUTES - 1] = "";
        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::MissingField {
                field: "planned_hrsenroute",
                role: ClientRole::PilotPrefiled,
            })
        );
    }

    #[test]
    fn half_filed_duration_is_fatal() {
        let parser = ClientParser::new(false);
        let mut fields = pilot_fields();
        fields[FUEL_MINUTES - 1] = "";

        assert!(parser.parse(&line(&fields)).is_err());
    }

    #[test]
    fn online_pilot_requires_server_and_logon() {
        let parser = ClientParser::new(false);

        let mut fields = pilot_fields();
        fields[SERVER_ID - 1] = "";
        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::MissingField {
                field: "server",
                role: ClientRole::PilotConnected,
            })
        );

        let mut fields = pilot_fields();
        fields[LOGON_TIME - 1] = "";
        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::MissingField {
                field: "time_logon",
                role: ClientRole::PilotConnected,
            })
        );

        // the dummy token means no timestamp and is unacceptable online
        let mut fields = pilot_fields();
        fields[LOGON_TIME - 1] = "00010101000000";
        assert!(parser.parse(&line(&fields)).is_err());
    }

    #[test]
    fn prefiling_with_server_is_fatal() {
        let parser = ClientParser::new(true);
        let mut fields = prefile_fields();
        fields[SERVER_ID - 1] = "SERVER1";

        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "server",
                role: ClientRole::PilotPrefiled,
            })
        );
    }

    #[test]
    fn atis_on_pilot_is_fatal() {
        let parser = ClientParser::new(false);
        let mut fields = pilot_fields();
        fields[ATIS_MESSAGE - 1] = "not a station";

        assert_eq!(
            parser.parse(&line(&fields)),
            Err(Error::ForbiddenField {
                field: "atis_message",
                role: ClientRole::PilotConnected,
            })
        );
    }

    #[test]
    fn atc_may_carry_flight_plan_data() {
        // nonsensical but accepted, free text passes through for any role
        let parser = ClientParser::new(false);
        let mut fields = atc_fields();
        fields[AIRCRAFT_TYPE - 1] = "B738";
        fields[DEPARTURE_AIRPORT - 1] = "EDDF";
        fields[ROUTE - 1] = "DCT";

        let record = parser.parse(&line(&fields)).expect("line should parse");
        assert_eq!(record.aircraft_type, "B738");
        assert_eq!(record.departure_airport, "EDDF");
        assert_eq!(record.route, "DCT");
    }

    #[test]
    fn parsing_is_idempotent() {
        let line = line(&pilot_fields());

        let first = ClientParser::new(false)
            .parse(&line)
            .expect("line should parse");
        let second = ClientParser::new(false)
            .parse(&line)
            .expect("line should parse");

        assert_eq!(first, second);
    }
}
