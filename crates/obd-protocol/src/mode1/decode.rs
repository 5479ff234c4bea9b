//! Mode 01 scaling formulas.
//!
//! Every function is pure. Single-byte PIDs take the data byte directly;
//! multi-byte PIDs take the payload slice and panic when it is shorter than
//! the PID requires. Callers routing untrusted payloads should go through
//! [`decode_pid`](super::decode_pid), which checks lengths first.

use super::status::{
    AuxInputStatus, CompressionMonitors, FuelSystemStatus, FuelSystems, IgnitionMonitors,
    MonitorStatus, O2Sensor, O2SensorsPresent, ObdStandard, SecondaryAirStatus, SparkMonitors,
    TestStatus,
};

/// Raw byte meaning "sensor not used for trim" in the O2 trim byte.
pub const O2_TRIM_UNUSED: u8 = 0xFF;

fn bit(byte: u8, index: u8) -> bool {
    byte & (1 << index) != 0
}

fn require(res: &[u8], len: usize, what: &str) {
    assert!(
        res.len() >= len,
        "{what} needs at least {len} bytes, got {}",
        res.len()
    );
}

fn word(res: &[u8]) -> u16 {
    u16::from_be_bytes([res[0], res[1]])
}

/// Whether `pid` is flagged in a supported-PIDs bitmap: bit `pid % 8` of
/// byte `pid / 8`.
///
/// # Panics
/// If `res` has no byte at index `pid / 8`.
pub fn is_supported(res: &[u8], pid: u8) -> bool {
    let byte_index = usize::from(pid / 8);
    require(res, byte_index + 1, "supported-PID bitmap");
    bit(res[byte_index], pid % 8)
}

/// Calculated engine load, fraction 0–1.
pub fn engine_load(v: u8) -> f64 {
    f64::from(v) / 255.0
}

/// Engine coolant temperature, °C.
pub fn coolant_temp(v: u8) -> i16 {
    i16::from(v) - 40
}

/// Short- or long-term fuel trim for either bank, % (negative = lean correction).
pub fn fuel_trim(v: u8) -> f64 {
    f64::from(v) / 128.0 * 100.0 - 100.0
}

/// Fuel rail gauge pressure, kPa.
pub fn fuel_pressure(v: u8) -> u16 {
    u16::from(v) * 3
}

/// Intake manifold absolute pressure, kPa.
pub fn intake_map(v: u8) -> u8 {
    v
}

/// Engine speed, rpm.
///
/// # Panics
/// If `res` is shorter than 2 bytes.
pub fn engine_rpm(res: &[u8]) -> f64 {
    require(res, 2, "engine RPM");
    f64::from(word(res)) / 4.0
}

/// Vehicle speed, km/h.
pub fn vehicle_speed(v: u8) -> u8 {
    v
}

/// Ignition timing advance, degrees before TDC.
pub fn timing_advance(v: u8) -> f64 {
    f64::from(v) / 2.0 - 64.0
}

/// Intake air temperature, °C.
pub fn intake_air_temp(v: u8) -> i16 {
    i16::from(v) - 40
}

/// Mass air flow rate, g/s.
///
/// # Panics
/// If `res` is shorter than 2 bytes.
pub fn maf_rate(res: &[u8]) -> f64 {
    require(res, 2, "MAF rate");
    f64::from(word(res)) / 100.0
}

/// Throttle position, fraction 0–1.
pub fn throttle_position(v: u8) -> f64 {
    f64::from(v) / 255.0
}

/// Oxygen sensor voltage, V.
pub fn o2_voltage(v: u8) -> f64 {
    f64::from(v) / 200.0
}

/// Oxygen sensor short-term fuel trim, %, or `None` for the unused sentinel.
pub fn o2_short_term_trim(v: u8) -> Option<f64> {
    (v != O2_TRIM_UNUSED).then(|| fuel_trim(v))
}

/// Oxygen sensor voltage plus its associated trim (PIDs 0x14–0x1B).
///
/// # Panics
/// If `res` is shorter than 2 bytes.
pub fn o2_sensor(res: &[u8]) -> O2Sensor {
    require(res, 2, "O2 sensor");
    O2Sensor {
        voltage: o2_voltage(res[0]),
        short_term_fuel_trim: o2_short_term_trim(res[1]),
    }
}

/// Run time since engine start, seconds.
///
/// # Panics
/// If `res` is shorter than 2 bytes.
pub fn run_time(res: &[u8]) -> u16 {
    require(res, 2, "run time");
    word(res)
}

/// Raw two-byte DTC that triggered the freeze frame (`0` = none).
///
/// # Panics
/// If `res` is shorter than 2 bytes.
pub fn freeze_dtc(res: &[u8]) -> u16 {
    require(res, 2, "freeze DTC");
    word(res)
}

/// Loop status of both fuel systems.
///
/// # Panics
/// If `res` is shorter than 2 bytes.
pub fn fuel_system_status(res: &[u8]) -> FuelSystems {
    require(res, 2, "fuel system status");
    FuelSystems {
        system1: FuelSystemStatus::from_byte(res[0]),
        system2: FuelSystemStatus::from_byte(res[1]),
    }
}

pub fn secondary_air_status(v: u8) -> Option<SecondaryAirStatus> {
    SecondaryAirStatus::from_byte(v)
}

/// Oxygen sensor presence: bits 0–3 bank 1, bits 4–7 bank 2.
pub fn o2_sensors_present(v: u8) -> O2SensorsPresent {
    let mut present = O2SensorsPresent::default();
    for i in 0..4u8 {
        present.bank1[usize::from(i)] = bit(v, i);
        present.bank2[usize::from(i)] = bit(v, i + 4);
    }
    present
}

pub fn obd_standard(v: u8) -> ObdStandard {
    ObdStandard::from_byte(v)
}

pub fn aux_input_status(v: u8) -> AuxInputStatus {
    AuxInputStatus {
        pto_active: bit(v, 0),
    }
}

/// Test `k`: availability is bit `k` of `available`, completion is bit `k`
/// of `incomplete` being *clear*.
fn test_status(available: u8, incomplete: u8, k: u8) -> TestStatus {
    TestStatus {
        available: bit(available, k),
        complete: !bit(incomplete, k),
    }
}

/// Monitor status since DTCs were cleared (PID 0x01).
///
/// Byte A carries the MIL (bit 7) and DTC count (bits 0–6). Byte B carries
/// the three common tests as available/incomplete bit pairs 0/4, 1/5, 2/6,
/// and bit 3 selects compression ignition. Bytes C and D carry the
/// family-specific tests at matching bit positions.
///
/// # Panics
/// If `res` is shorter than 4 bytes.
pub fn monitor_status(res: &[u8]) -> MonitorStatus {
    require(res, 4, "monitor status");
    let (a, b, c, d) = (res[0], res[1], res[2], res[3]);

    let common = |k: u8| TestStatus {
        available: bit(b, k),
        complete: !bit(b, k + 4),
    };

    let ignition = if bit(b, 3) {
        IgnitionMonitors::Compression(CompressionMonitors {
            nmhc_catalyst: test_status(c, d, 0),
            nox_scr: test_status(c, d, 1),
            boost_pressure: test_status(c, d, 3),
            exhaust_gas_sensor: test_status(c, d, 5),
            pm_filter: test_status(c, d, 6),
            egr_vvt: test_status(c, d, 7),
        })
    } else {
        IgnitionMonitors::Spark(SparkMonitors {
            catalyst: test_status(c, d, 0),
            heated_catalyst: test_status(c, d, 1),
            evap_system: test_status(c, d, 2),
            secondary_air: test_status(c, d, 3),
            ac_refrigerant: test_status(c, d, 4),
            o2_sensor: test_status(c, d, 5),
            o2_sensor_heater: test_status(c, d, 6),
            egr_system: test_status(c, d, 7),
        })
    };

    MonitorStatus {
        mil: bit(a, 7),
        dtc_count: a & 0x7F,
        misfire: common(0),
        fuel_system: common(1),
        components: common(2),
        ignition,
    }
}
