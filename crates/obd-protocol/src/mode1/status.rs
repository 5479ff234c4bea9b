//! Structured Mode 01 values: monitor readiness, fuel/air system states,
//! oxygen sensor layouts and the OBD standard enumeration.

use serde::{Deserialize, Serialize};

/// Availability and completion of one on-board monitor test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStatus {
    /// Test is available and enabled.
    pub available: bool,
    /// Test has completed since DTCs were last cleared.
    pub complete: bool,
}

/// Decoded PID 0x01: MIL state, DTC count and readiness monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorStatus {
    /// Malfunction indicator lamp is (or should be) on.
    pub mil: bool,
    /// Number of emissions-related DTCs stored.
    pub dtc_count: u8,
    pub misfire: TestStatus,
    pub fuel_system: TestStatus,
    pub components: TestStatus,
    /// Engine-family specific monitors.
    pub ignition: IgnitionMonitors,
}

/// The ignition-family monitor block. Exactly one family is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IgnitionMonitors {
    Spark(SparkMonitors),
    Compression(CompressionMonitors),
}

impl IgnitionMonitors {
    pub fn spark(&self) -> Option<&SparkMonitors> {
        match self {
            IgnitionMonitors::Spark(s) => Some(s),
            IgnitionMonitors::Compression(_) => None,
        }
    }

    pub fn compression(&self) -> Option<&CompressionMonitors> {
        match self {
            IgnitionMonitors::Compression(c) => Some(c),
            IgnitionMonitors::Spark(_) => None,
        }
    }
}

/// Monitors reported by spark-ignition (gasoline) engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkMonitors {
    pub catalyst: TestStatus,
    pub heated_catalyst: TestStatus,
    pub evap_system: TestStatus,
    pub secondary_air: TestStatus,
    pub ac_refrigerant: TestStatus,
    pub o2_sensor: TestStatus,
    pub o2_sensor_heater: TestStatus,
    pub egr_system: TestStatus,
}

/// Monitors reported by compression-ignition (diesel) engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionMonitors {
    /// Non-methane hydrocarbon catalyst.
    pub nmhc_catalyst: TestStatus,
    pub nox_scr: TestStatus,
    pub boost_pressure: TestStatus,
    pub exhaust_gas_sensor: TestStatus,
    pub pm_filter: TestStatus,
    /// EGR and/or VVT system.
    pub egr_vvt: TestStatus,
}

/// Loop status of a single fuel system (PID 0x03).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelSystemStatus {
    /// Open loop, engine not yet warm.
    OpenTemperature,
    /// Closed loop, using oxygen sensor feedback.
    Closed,
    /// Open loop due to engine load or deceleration fuel cut.
    OpenLoad,
    /// Open loop due to system failure.
    OpenFailure,
    /// Closed loop with a fault in at least one feedback sensor.
    ClosedFault,
}

impl FuelSystemStatus {
    /// Map a raw status byte. `0` (system absent) and undefined values yield `None`.
    pub fn from_byte(v: u8) -> Option<Self> {
        match v {
            1 => Some(FuelSystemStatus::OpenTemperature),
            2 => Some(FuelSystemStatus::Closed),
            4 => Some(FuelSystemStatus::OpenLoad),
            8 => Some(FuelSystemStatus::OpenFailure),
            16 => Some(FuelSystemStatus::ClosedFault),
            _ => None,
        }
    }
}

/// Both fuel systems reported by PID 0x03.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelSystems {
    pub system1: Option<FuelSystemStatus>,
    pub system2: Option<FuelSystemStatus>,
}

/// Commanded secondary air status (PID 0x12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryAirStatus {
    Upstream,
    /// Downstream of the catalytic converter.
    Downstream,
    /// Off, or drawing from outside atmosphere.
    Off,
    /// Pump commanded on for diagnostics.
    Diagnostics,
}

impl SecondaryAirStatus {
    pub fn from_byte(v: u8) -> Option<Self> {
        match v {
            1 => Some(SecondaryAirStatus::Upstream),
            2 => Some(SecondaryAirStatus::Downstream),
            4 => Some(SecondaryAirStatus::Off),
            8 => Some(SecondaryAirStatus::Diagnostics),
            _ => None,
        }
    }
}

/// Oxygen sensors present (PID 0x13). Index `i` is sensor `i + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct O2SensorsPresent {
    pub bank1: [bool; 4],
    pub bank2: [bool; 4],
}

impl O2SensorsPresent {
    pub fn count(&self) -> usize {
        self.bank1.iter().chain(self.bank2.iter()).filter(|p| **p).count()
    }
}

/// One oxygen sensor reading (PIDs 0x14–0x1B).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct O2Sensor {
    /// Sensor voltage, V.
    pub voltage: f64,
    /// Short-term fuel trim, %. `None` when the sensor is not used for trim.
    pub short_term_fuel_trim: Option<f64>,
}

/// Auxiliary input status (PID 0x1E).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxInputStatus {
    /// Power take-off is active.
    pub pto_active: bool,
}

/// OBD standard the vehicle conforms to (PID 0x1C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObdStandard {
    /// OBD-II as defined by CARB.
    Obd2Carb,
    /// OBD as defined by the EPA.
    ObdEpa,
    ObdAndObd2,
    Obd1,
    /// Not OBD compliant.
    NotCompliant,
    /// EOBD (Europe).
    Eobd,
    EobdAndObd2,
    EobdAndObd,
    EobdObdAndObd2,
    /// JOBD (Japan).
    Jobd,
    JobdAndObd2,
    JobdAndEobd,
    JobdEobdAndObd2,
    /// Engine Manufacturer Diagnostics.
    Emd,
    EmdPlus,
    /// Heavy Duty OBD (child/partial).
    HdObdC,
    HdObd,
    /// World Wide Harmonized OBD.
    WwhObd,
    /// Heavy Duty Euro OBD Stage I without NOx control.
    HdEobd1,
    HdEobd1N,
    HdEobd2,
    HdEobd2N,
    /// Brazil OBD phase 1.
    ObdBr1,
    ObdBr2,
    /// Korean OBD.
    Kobd,
    /// India OBD I.
    Iobd1,
    Iobd2,
    /// Heavy Duty Euro OBD Stage VI.
    HdEobd6,
    /// Code in a reserved range (0, 14–16, 22, 27, 34–250).
    Reserved(u8),
    /// 251–255.
    NotApplicable(u8),
}

impl ObdStandard {
    pub fn from_byte(v: u8) -> Self {
        use ObdStandard::*;
        match v {
            1 => Obd2Carb,
            2 => ObdEpa,
            3 => ObdAndObd2,
            4 => Obd1,
            5 => NotCompliant,
            6 => Eobd,
            7 => EobdAndObd2,
            8 => EobdAndObd,
            9 => EobdObdAndObd2,
            10 => Jobd,
            11 => JobdAndObd2,
            12 => JobdAndEobd,
            13 => JobdEobdAndObd2,
            17 => Emd,
            18 => EmdPlus,
            19 => HdObdC,
            20 => HdObd,
            21 => WwhObd,
            23 => HdEobd1,
            24 => HdEobd1N,
            25 => HdEobd2,
            26 => HdEobd2N,
            28 => ObdBr1,
            29 => ObdBr2,
            30 => Kobd,
            31 => Iobd1,
            32 => Iobd2,
            33 => HdEobd6,
            251..=255 => NotApplicable(v),
            _ => Reserved(v),
        }
    }

    /// True for every code with a defined meaning.
    pub fn is_known(&self) -> bool {
        !matches!(self, ObdStandard::Reserved(_) | ObdStandard::NotApplicable(_))
    }
}
