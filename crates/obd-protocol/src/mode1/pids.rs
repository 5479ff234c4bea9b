//! Mode 01 PID numbers and their static metadata.

/// PIDs supported 0x01–0x20 (bitmap).
pub const SUPPORTED_PIDS_01_20: u8 = 0x00;
/// Monitor status since DTCs cleared. Use with [`monitor_status`](super::monitor_status).
pub const MONITOR_STATUS: u8 = 0x01;
/// DTC that caused the stored freeze frame.
pub const FREEZE_DTC: u8 = 0x02;
/// Loop status of up to two fuel systems, one byte each.
pub const FUEL_SYSTEM_STATUS: u8 = 0x03;
pub const ENGINE_LOAD: u8 = 0x04;
/// Engine coolant temperature (ECT).
pub const COOLANT_TEMP: u8 = 0x05;
pub const SHORT_TERM_FUEL_TRIM_BANK1: u8 = 0x06;
pub const LONG_TERM_FUEL_TRIM_BANK1: u8 = 0x07;
pub const SHORT_TERM_FUEL_TRIM_BANK2: u8 = 0x08;
pub const LONG_TERM_FUEL_TRIM_BANK2: u8 = 0x09;
/// Fuel pressure (gauge).
pub const FUEL_PRESSURE: u8 = 0x0A;
/// Intake manifold absolute pressure, kPa.
pub const INTAKE_MAP: u8 = 0x0B;
pub const ENGINE_RPM: u8 = 0x0C;
/// Vehicle speed, km/h.
pub const VEHICLE_SPEED: u8 = 0x0D;
pub const TIMING_ADVANCE: u8 = 0x0E;
pub const INTAKE_AIR_TEMP: u8 = 0x0F;
pub const MAF_RATE: u8 = 0x10;
pub const THROTTLE_POSITION: u8 = 0x11;
/// Commanded secondary air status.
pub const SECONDARY_AIR_STATUS: u8 = 0x12;
/// Oxygen sensors present (two banks, four sensors each).
pub const O2_SENSORS_PRESENT: u8 = 0x13;
/// Bank 1 sensor 1. Sensors 2–8 follow consecutively up to 0x1B.
pub const O2_SENSOR_1: u8 = 0x14;
pub const O2_SENSOR_8: u8 = 0x1B;
/// OBD standards this vehicle conforms to.
pub const OBD_STANDARD: u8 = 0x1C;
pub const AUX_INPUT_STATUS: u8 = 0x1E;
/// Run time since engine start, seconds.
pub const RUN_TIME: u8 = 0x1F;
/// PIDs supported 0x21–0x40 (bitmap).
pub const SUPPORTED_PIDS_21_40: u8 = 0x20;

/// Static description of a decodable PID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PidInfo {
    pub pid: u8,
    pub name: &'static str,
    pub unit: &'static str,
    /// Minimum number of data bytes the decoder reads.
    pub min_len: usize,
}

const fn entry(pid: u8, name: &'static str, unit: &'static str, min_len: usize) -> PidInfo {
    PidInfo {
        pid,
        name,
        unit,
        min_len,
    }
}

/// Look up metadata for a PID this crate can decode.
pub fn info(pid: u8) -> Option<PidInfo> {
    let info = match pid {
        SUPPORTED_PIDS_01_20 => entry(pid, "PIDs Supported 01-20", "", 4),
        MONITOR_STATUS => entry(pid, "Monitor Status", "", 4),
        FREEZE_DTC => entry(pid, "Freeze Frame DTC", "", 2),
        FUEL_SYSTEM_STATUS => entry(pid, "Fuel System Status", "", 2),
        ENGINE_LOAD => entry(pid, "Engine Load", "", 1),
        COOLANT_TEMP => entry(pid, "Coolant Temperature", "°C", 1),
        SHORT_TERM_FUEL_TRIM_BANK1 => entry(pid, "Short Term Fuel Trim B1", "%", 1),
        LONG_TERM_FUEL_TRIM_BANK1 => entry(pid, "Long Term Fuel Trim B1", "%", 1),
        SHORT_TERM_FUEL_TRIM_BANK2 => entry(pid, "Short Term Fuel Trim B2", "%", 1),
        LONG_TERM_FUEL_TRIM_BANK2 => entry(pid, "Long Term Fuel Trim B2", "%", 1),
        FUEL_PRESSURE => entry(pid, "Fuel Pressure", "kPa", 1),
        INTAKE_MAP => entry(pid, "Intake MAP", "kPa", 1),
        ENGINE_RPM => entry(pid, "Engine RPM", "rpm", 2),
        VEHICLE_SPEED => entry(pid, "Vehicle Speed", "km/h", 1),
        TIMING_ADVANCE => entry(pid, "Timing Advance", "°", 1),
        INTAKE_AIR_TEMP => entry(pid, "Intake Air Temp", "°C", 1),
        MAF_RATE => entry(pid, "MAF Rate", "g/s", 2),
        THROTTLE_POSITION => entry(pid, "Throttle Position", "", 1),
        SECONDARY_AIR_STATUS => entry(pid, "Commanded Secondary Air", "", 1),
        O2_SENSORS_PRESENT => entry(pid, "O2 Sensors Present", "", 1),
        O2_SENSOR_1..=O2_SENSOR_8 => entry(pid, "O2 Sensor", "V", 2),
        OBD_STANDARD => entry(pid, "OBD Standard", "", 1),
        AUX_INPUT_STATUS => entry(pid, "Auxiliary Input Status", "", 1),
        RUN_TIME => entry(pid, "Runtime Since Start", "s", 2),
        SUPPORTED_PIDS_21_40 => entry(pid, "PIDs Supported 21-40", "", 4),
        _ => return None,
    };
    Some(info)
}
