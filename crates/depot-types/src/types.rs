//! Depot and operating mode definitions

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::InputError;

/// Bus depot whose drivers are being accounted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Depot {
    Mahaboobnagar,
    Jagityal,
    Khamareddy,
    Khammam,
    Adilabad,
    Mahabubabad,
    Falaknama,
    Ranigunj,
    Miryalaguda,
    Sangareddy,
    Hyderabad2,
}

impl Depot {
    /// All depots, in selection-list order
    pub const ALL: [Depot; 11] = [
        Depot::Mahaboobnagar,
        Depot::Jagityal,
        Depot::Khamareddy,
        Depot::Khammam,
        Depot::Adilabad,
        Depot::Mahabubabad,
        Depot::Falaknama,
        Depot::Ranigunj,
        Depot::Miryalaguda,
        Depot::Sangareddy,
        Depot::Hyderabad2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Depot::Mahaboobnagar => "Mahaboobnagar",
            Depot::Jagityal => "Jagityal",
            Depot::Khamareddy => "Khamareddy",
            Depot::Khammam => "Khammam",
            Depot::Adilabad => "Adilabad",
            Depot::Mahabubabad => "Mahabubabad",
            Depot::Falaknama => "Falaknama",
            Depot::Ranigunj => "Ranigunj",
            Depot::Miryalaguda => "Miryalaguda",
            Depot::Sangareddy => "Sangareddy",
            Depot::Hyderabad2 => "Hyderabad-2",
        }
    }
}

impl std::fmt::Display for Depot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Depot {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Depot::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownDepot(wanted.to_string()))
    }
}

impl TryFrom<String> for Depot {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Depot> for String {
    fn from(depot: Depot) -> Self {
        depot.name().to_string()
    }
}

/// Operating category; selects which benchmark constants apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    Urban,
    Rural,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Urban => "Urban",
            Mode::Rural => "Rural",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urban" => Ok(Mode::Urban),
            "rural" => Ok(Mode::Rural),
            other => Err(InputError::UnknownMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.label().to_lowercase()
    }
}
