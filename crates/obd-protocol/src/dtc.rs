//! Diagnostic trouble codes in their 5-character SAE J2012 text form.
//!
//! Layout: `<type><category><system><fault:2>`, e.g. `P0301` is a powertrain,
//! SAE-defined, ignition-system code with fault index 01.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DtcError, DtcResult};

/// Length of the canonical text form.
pub const DTC_TEXT_LEN: usize = 5;

/// Largest fault index representable in two decimal digits.
pub const MAX_FAULT: u8 = 99;

/// A single diagnostic trouble code.
///
/// The fault index is validated on construction, so every `Dtc` formats to
/// exactly five characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dtc {
    kind: DtcType,
    category: DtcCategory,
    system: DtcSystem,
    fault: u8,
}

/// Which vehicle domain raised the code (first character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtcType {
    /// P: Powertrain (engine, transmission).
    Powertrain,
    /// B: Body (airbags, AC, lighting).
    Body,
    /// C: Chassis (ABS, steering).
    Chassis,
    /// U: Network/Communication.
    Network,
}

/// Whether the code is SAE-defined or manufacturer-specific (second character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtcCategory {
    Sae,
    Manufacturer,
}

/// Sub-system the code originates from (third character, `1`–`8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtcSystem {
    AirFuel,
    AirFuelInjector,
    Ignition,
    Emissions,
    SpeedIdle,
    Computer,
    Transmission1,
    Transmission2,
}

impl DtcType {
    pub fn as_char(self) -> char {
        match self {
            DtcType::Powertrain => 'P',
            DtcType::Body => 'B',
            DtcType::Chassis => 'C',
            DtcType::Network => 'U',
        }
    }

    pub fn from_char(c: char) -> DtcResult<Self> {
        match c {
            'P' => Ok(DtcType::Powertrain),
            'B' => Ok(DtcType::Body),
            'C' => Ok(DtcType::Chassis),
            'U' => Ok(DtcType::Network),
            other => Err(DtcError::InvalidType(other)),
        }
    }
}

impl DtcCategory {
    pub fn as_char(self) -> char {
        match self {
            DtcCategory::Sae => '0',
            DtcCategory::Manufacturer => '1',
        }
    }

    pub fn from_char(c: char) -> DtcResult<Self> {
        match c {
            '0' => Ok(DtcCategory::Sae),
            '1' => Ok(DtcCategory::Manufacturer),
            other => Err(DtcError::InvalidCategory(other)),
        }
    }
}

impl DtcSystem {
    /// The system digit, `1`–`8`.
    pub fn digit(self) -> u8 {
        match self {
            DtcSystem::AirFuel => 1,
            DtcSystem::AirFuelInjector => 2,
            DtcSystem::Ignition => 3,
            DtcSystem::Emissions => 4,
            DtcSystem::SpeedIdle => 5,
            DtcSystem::Computer => 6,
            DtcSystem::Transmission1 => 7,
            DtcSystem::Transmission2 => 8,
        }
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.digit())
    }

    pub fn from_char(c: char) -> DtcResult<Self> {
        match c {
            '1' => Ok(DtcSystem::AirFuel),
            '2' => Ok(DtcSystem::AirFuelInjector),
            '3' => Ok(DtcSystem::Ignition),
            '4' => Ok(DtcSystem::Emissions),
            '5' => Ok(DtcSystem::SpeedIdle),
            '6' => Ok(DtcSystem::Computer),
            '7' => Ok(DtcSystem::Transmission1),
            '8' => Ok(DtcSystem::Transmission2),
            other => Err(DtcError::InvalidSystem(other)),
        }
    }
}

impl Dtc {
    /// Build a code from its parts. Fails if `fault` does not fit two digits.
    pub fn new(
        kind: DtcType,
        category: DtcCategory,
        system: DtcSystem,
        fault: u8,
    ) -> DtcResult<Self> {
        if fault > MAX_FAULT {
            return Err(DtcError::FaultOutOfRange(fault));
        }
        Ok(Self {
            kind,
            category,
            system,
            fault,
        })
    }

    pub fn kind(&self) -> DtcType {
        self.kind
    }

    pub fn category(&self) -> DtcCategory {
        self.category
    }

    pub fn system(&self) -> DtcSystem {
        self.system
    }

    pub fn fault(&self) -> u8 {
        self.fault
    }

    /// Parse the 5-character text form.
    ///
    /// The system digit is read from character 2 and the fault index from
    /// characters 3–4; the two fields never overlap.
    pub fn parse(s: &str) -> DtcResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != DTC_TEXT_LEN {
            return Err(DtcError::InvalidLength(chars.len()));
        }

        let kind = DtcType::from_char(chars[0])?;
        let category = DtcCategory::from_char(chars[1])?;
        let system = DtcSystem::from_char(chars[2])?;

        let fault_text: String = chars[3..].iter().collect();
        if !chars[3..].iter().all(char::is_ascii_digit) {
            return Err(DtcError::InvalidFault(fault_text));
        }
        let fault = fault_text
            .parse::<u8>()
            .map_err(|_| DtcError::InvalidFault(fault_text.clone()))?;

        Self::new(kind, category, system, fault)
    }
}

impl fmt::Display for Dtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{:02}",
            self.kind.as_char(),
            self.category.as_char(),
            self.system.as_char(),
            self.fault
        )
    }
}

impl FromStr for Dtc {
    type Err = DtcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dtc::parse(s)
    }
}

impl TryFrom<String> for Dtc {
    type Error = DtcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Dtc::parse(&value)
    }
}

impl From<Dtc> for String {
    fn from(dtc: Dtc) -> Self {
        dtc.to_string()
    }
}
