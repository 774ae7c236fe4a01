use std::fmt;

use serde::{Deserialize, Serialize};
use utility::id::HasId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locomotive {
    pub depot: String,
    #[serde(rename = "type")]
    pub kind: LocomotiveKind,
    pub year: i32,
}

impl HasId for Locomotive {
    type IdType = i32;
}

impl Locomotive {
    pub fn new<S: Into<String>>(depot: S, kind: LocomotiveKind, year: i32) -> Self {
        Self {
            depot: depot.into(),
            kind,
            year,
        }
    }
}

/// Service category of a locomotive. Stored as free text, so values other
/// than the two known categories are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocomotiveKind {
    Freight,
    Passenger,
    Other(String),
}

impl LocomotiveKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Freight => "freight",
            Self::Passenger => "passenger",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for LocomotiveKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "freight" => Self::Freight,
            "passenger" => Self::Passenger,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for LocomotiveKind {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<LocomotiveKind> for String {
    fn from(kind: LocomotiveKind) -> Self {
        match kind {
            LocomotiveKind::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for LocomotiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
