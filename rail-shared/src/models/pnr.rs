use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking status carried by a PNR record.
///
/// On the wire the status is the short code used by the booking system
/// (`CNF`, `WL`); unknown codes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PnrStatus {
    Confirmed,
    Waitlisted,
    Other(String),
}

impl PnrStatus {
    pub fn code(&self) -> &str {
        match self {
            PnrStatus::Confirmed => "CNF",
            PnrStatus::Waitlisted => "WL",
            PnrStatus::Other(code) => code,
        }
    }
}

impl From<String> for PnrStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "CNF" => PnrStatus::Confirmed,
            "WL" => PnrStatus::Waitlisted,
            _ => PnrStatus::Other(code),
        }
    }
}

impl From<PnrStatus> for String {
    fn from(status: PnrStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for PnrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PnrStatus::Confirmed => write!(f, "CONFIRMED"),
            PnrStatus::Waitlisted => write!(f, "WAITLISTED"),
            PnrStatus::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Passenger Name Record as returned by a status lookup.
///
/// `coach`/`seat` are set for confirmed bookings, `waitlist` for waitlisted ones.
/// `train` is the denormalized "number NAME" label, not a key into the route table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PnrRecord {
    pub pnr: String,
    pub status: PnrStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waitlist: Option<String>,
    pub train: String,
}

impl PnrRecord {
    pub fn confirmed(pnr: &str, coach: &str, seat: &str, train: &str) -> Self {
        Self {
            pnr: pnr.to_string(),
            status: PnrStatus::Confirmed,
            coach: Some(coach.to_string()),
            seat: Some(seat.to_string()),
            waitlist: None,
            train: train.to_string(),
        }
    }

    pub fn waitlisted(pnr: &str, position: &str, train: &str) -> Self {
        Self {
            pnr: pnr.to_string(),
            status: PnrStatus::Waitlisted,
            coach: None,
            seat: None,
            waitlist: Some(position.to_string()),
            train: train.to_string(),
        }
    }
}
