//! Wire DTOs for the Yoga studio REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server JSON exactly, including its mix of
//! `teacher_id` and `createdAt`. Date fields are decoded leniently because
//! the server emits session dates as RFC 3339 timestamps while the client
//! submits them as plain `YYYY-MM-DD` strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

// =============================================================================
// AUTH
// =============================================================================

/// Credentials posted to `api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile posted to `api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// The authenticated user's profile and token, as returned by a login.
///
/// Held in memory by [`crate::store::SessionStore`] for the lifetime of the
/// process and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInformation {
    /// Bearer token attached to every subsequent request.
    pub token: String,
    /// Token scheme, `"Bearer"` in practice.
    #[serde(rename = "type")]
    pub token_type: String,
    /// Numeric user identifier.
    pub id: u64,
    /// Login name (the user's email).
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the user may create, update and delete sessions.
    pub admin: bool,
}

// =============================================================================
// SESSIONS
// =============================================================================

/// A scheduled yoga class with one teacher and a participant list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Calendar day of the class.
    #[serde(with = "wire_date")]
    pub date: Date,
    /// Identifier of the teaching [`Teacher`].
    pub teacher_id: u64,
    /// Participant user identifiers, in server order.
    #[serde(default)]
    pub users: Vec<u64>,
    #[serde(rename = "createdAt", default, with = "wire_timestamp_opt")]
    pub created_at: Option<PrimitiveDateTime>,
    #[serde(rename = "updatedAt", default, with = "wire_timestamp_opt")]
    pub updated_at: Option<PrimitiveDateTime>,
}

impl Session {
    /// Whether `user_id` is in the participant list.
    #[must_use]
    pub fn has_participant(&self, user_id: u64) -> bool {
        self.users.contains(&user_id)
    }

    /// Number of distinct participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.users.iter().collect::<BTreeSet<_>>().len()
    }
}

/// Body sent to `POST api/session` and `PUT api/session/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub name: String,
    #[serde(with = "wire_date")]
    pub date: Date,
    pub teacher_id: u64,
    pub description: String,
}

// =============================================================================
// TEACHERS & USERS
// =============================================================================

/// A teacher, read-only from the client's perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, with = "wire_timestamp_opt")]
    pub created_at: Option<PrimitiveDateTime>,
    #[serde(default, with = "wire_timestamp_opt")]
    pub updated_at: Option<PrimitiveDateTime>,
}

impl Teacher {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A registered user as returned by `GET api/user/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    #[serde(default, with = "wire_timestamp_opt")]
    pub created_at: Option<PrimitiveDateTime>,
    #[serde(default, with = "wire_timestamp_opt")]
    pub updated_at: Option<PrimitiveDateTime>,
}

impl User {
    /// Account-page display name: first name as typed, last name uppercased.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name.to_uppercase())
    }
}

// =============================================================================
// DATE FORMATTING
// =============================================================================

/// `YYYY-MM-DD`, the value a date form field holds.
#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Human display form, e.g. `January 1, 2025`.
#[must_use]
pub fn long_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

/// Parse a form field value in `YYYY-MM-DD` form.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Decode any timestamp shape the server emits into a UTC wall-clock value.
///
/// Accepted: RFC 3339 (`2025-01-01T00:00:00.000+00:00`), naive
/// (`2025-01-01T10:00:00[.fff]`), a bare date, or epoch milliseconds.
fn parse_wire_timestamp(value: &serde_json::Value) -> Result<PrimitiveDateTime, String> {
    match value {
        serde_json::Value::String(raw) => parse_timestamp_str(raw),
        serde_json::Value::Number(number) => {
            let millis = number
                .as_i64()
                .ok_or_else(|| format!("timestamp {number} is not an integer"))?;
            let utc = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
                .map_err(|e| e.to_string())?;
            Ok(PrimitiveDateTime::new(utc.date(), utc.time()))
        }
        other => Err(format!("expected date string or epoch millis, got {other}")),
    }
}

fn parse_timestamp_str(raw: &str) -> Result<PrimitiveDateTime, String> {
    let raw = raw.trim();
    if let Ok(with_offset) = OffsetDateTime::parse(raw, &Rfc3339) {
        let utc = with_offset.to_offset(UtcOffset::UTC);
        return Ok(PrimitiveDateTime::new(utc.date(), utc.time()));
    }
    if let Ok(naive) = PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    ) {
        return Ok(naive);
    }
    if let Ok(naive) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")) {
        return Ok(naive);
    }
    parse_iso_date(raw)
        .map(Date::midnight)
        .ok_or_else(|| format!("unrecognized date `{raw}`"))
}

fn format_wire_timestamp(value: PrimitiveDateTime) -> String {
    format!(
        "{}T{:02}:{:02}:{:02}",
        iso_date(value.date()),
        value.hour(),
        value.minute(),
        value.second()
    )
}

mod wire_date {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&iso_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        parse_wire_timestamp(&value)
            .map(PrimitiveDateTime::date)
            .map_err(D::Error::custom)
    }
}

mod wire_timestamp_opt {
    use super::*;
    use serde::de::Error as _;

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<PrimitiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&format_wire_timestamp(*ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        parse_wire_timestamp(&value).map(Some).map_err(D::Error::custom)
    }
}
