//! Length-checked dispatch from a PID and its payload to a typed value.

use serde::{Deserialize, Serialize};

use super::decode as d;
use super::pids;
use super::status::{
    AuxInputStatus, FuelSystems, MonitorStatus, O2Sensor, O2SensorsPresent, ObdStandard,
    SecondaryAirStatus,
};
use crate::error::DecodeError;

/// Any decoded Mode 01 value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Mode1Value {
    /// PIDs flagged in a supported-PIDs bitmap, offset by the bitmap's base PID.
    SupportedPids(Vec<u8>),
    MonitorStatus(MonitorStatus),
    FreezeDtc(u16),
    FuelSystems(FuelSystems),
    EngineLoad(f64),
    CoolantTemp(i16),
    FuelTrim(f64),
    FuelPressure(u16),
    IntakeMap(u8),
    EngineRpm(f64),
    VehicleSpeed(u8),
    TimingAdvance(f64),
    IntakeAirTemp(i16),
    MafRate(f64),
    ThrottlePosition(f64),
    SecondaryAir(Option<SecondaryAirStatus>),
    O2SensorsPresent(O2SensorsPresent),
    /// `sensor` is 1-based.
    O2Sensor { sensor: u8, reading: O2Sensor },
    ObdStandard(ObdStandard),
    AuxInput(AuxInputStatus),
    RunTime(u16),
}

impl Mode1Value {
    /// The value as a single number, for the scalar PIDs.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Mode1Value::EngineLoad(v)
            | Mode1Value::FuelTrim(v)
            | Mode1Value::EngineRpm(v)
            | Mode1Value::TimingAdvance(v)
            | Mode1Value::MafRate(v)
            | Mode1Value::ThrottlePosition(v) => Some(v),
            Mode1Value::CoolantTemp(v) | Mode1Value::IntakeAirTemp(v) => Some(f64::from(v)),
            Mode1Value::FuelPressure(v) | Mode1Value::RunTime(v) => Some(f64::from(v)),
            Mode1Value::IntakeMap(v) | Mode1Value::VehicleSpeed(v) => Some(f64::from(v)),
            _ => None,
        }
    }
}

/// Decode `data` (payload after the SID and PID echo) for `pid`.
///
/// Unlike the individual decoders this never panics: unknown PIDs and short
/// payloads are reported as errors.
pub fn decode_pid(pid: u8, data: &[u8]) -> Result<Mode1Value, DecodeError> {
    let info = pids::info(pid).ok_or(DecodeError::UnknownPid { pid })?;
    if data.len() < info.min_len {
        return Err(DecodeError::TooShort {
            pid,
            need: info.min_len,
            got: data.len(),
        });
    }

    let v = data[0];
    let value = match pid {
        pids::SUPPORTED_PIDS_01_20 | pids::SUPPORTED_PIDS_21_40 => Mode1Value::SupportedPids(
            (0..32u8)
                .filter(|&i| d::is_supported(data, i))
                .map(|i| pid + i)
                .collect(),
        ),
        pids::MONITOR_STATUS => Mode1Value::MonitorStatus(d::monitor_status(data)),
        pids::FREEZE_DTC => Mode1Value::FreezeDtc(d::freeze_dtc(data)),
        pids::FUEL_SYSTEM_STATUS => Mode1Value::FuelSystems(d::fuel_system_status(data)),
        pids::ENGINE_LOAD => Mode1Value::EngineLoad(d::engine_load(v)),
        pids::COOLANT_TEMP => Mode1Value::CoolantTemp(d::coolant_temp(v)),
        pids::SHORT_TERM_FUEL_TRIM_BANK1
        | pids::LONG_TERM_FUEL_TRIM_BANK1
        | pids::SHORT_TERM_FUEL_TRIM_BANK2
        | pids::LONG_TERM_FUEL_TRIM_BANK2 => Mode1Value::FuelTrim(d::fuel_trim(v)),
        pids::FUEL_PRESSURE => Mode1Value::FuelPressure(d::fuel_pressure(v)),
        pids::INTAKE_MAP => Mode1Value::IntakeMap(d::intake_map(v)),
        pids::ENGINE_RPM => Mode1Value::EngineRpm(d::engine_rpm(data)),
        pids::VEHICLE_SPEED => Mode1Value::VehicleSpeed(d::vehicle_speed(v)),
        pids::TIMING_ADVANCE => Mode1Value::TimingAdvance(d::timing_advance(v)),
        pids::INTAKE_AIR_TEMP => Mode1Value::IntakeAirTemp(d::intake_air_temp(v)),
        pids::MAF_RATE => Mode1Value::MafRate(d::maf_rate(data)),
        pids::THROTTLE_POSITION => Mode1Value::ThrottlePosition(d::throttle_position(v)),
        pids::SECONDARY_AIR_STATUS => Mode1Value::SecondaryAir(d::secondary_air_status(v)),
        pids::O2_SENSORS_PRESENT => Mode1Value::O2SensorsPresent(d::o2_sensors_present(v)),
        pids::O2_SENSOR_1..=pids::O2_SENSOR_8 => Mode1Value::O2Sensor {
            sensor: pid - pids::O2_SENSOR_1 + 1,
            reading: d::o2_sensor(data),
        },
        pids::OBD_STANDARD => Mode1Value::ObdStandard(d::obd_standard(v)),
        pids::AUX_INPUT_STATUS => Mode1Value::AuxInput(d::aux_input_status(v)),
        pids::RUN_TIME => Mode1Value::RunTime(d::run_time(data)),
        _ => return Err(DecodeError::UnknownPid { pid }),
    };
    Ok(value)
}
