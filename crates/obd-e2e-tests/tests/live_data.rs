//! E2E tests for Mode 01 reads through `Client` -> `Elm327` -> mock adapter.

mod helpers;

use std::time::Duration;

use helpers::{TestHarness, obd_reply};
use obd_elm327::{Client, ElmError, MockAdapter};
use obd_protocol::mode1::{IgnitionMonitors, ObdStandard, pids};
use obd_protocol::{DecodeError, Mode1Value};

/// RPM request goes out as hex and decodes to a quarter-RPM value.
#[tokio::test]
async fn e2e_engine_rpm() {
    let h = TestHarness::with_script(&[&obd_reply("010C", "41 0C 1A 00")]);
    let (mut client, adapter) = h.into_client();

    let value = client.read_pid(pids::ENGINE_RPM).await.unwrap();
    assert_eq!(value, Mode1Value::EngineRpm(1664.0));
    assert_eq!(adapter.take_written(), "010C\r");
}

/// Polling the same PID uses the adapter's repeat shortcut.
#[tokio::test]
async fn e2e_polling_uses_repeat() {
    let h = TestHarness::with_script(&[
        &obd_reply("010D", "41 0D 32"),
        "\r41 0D 3C\r\r>",
        &obd_reply("0105", "41 05 7B"),
    ]);
    let (mut client, adapter) = h.into_client();

    assert_eq!(
        client.read_pid(pids::VEHICLE_SPEED).await.unwrap(),
        Mode1Value::VehicleSpeed(50)
    );
    assert_eq!(
        client.read_pid(pids::VEHICLE_SPEED).await.unwrap(),
        Mode1Value::VehicleSpeed(60)
    );
    assert_eq!(
        client.read_pid(pids::COOLANT_TEMP).await.unwrap(),
        Mode1Value::CoolantTemp(83)
    );
    assert_eq!(adapter.take_written(), "010D\r\r0105\r");
}

/// First request on a fresh bus prints SEARCHING... before the data.
#[tokio::test]
async fn e2e_searching_banner() {
    let h = TestHarness::with_script(&["0100\rSEARCHING...\r41 00 BE 1F A8 13\r\r>"]);
    let (mut client, _adapter) = h.into_client();

    let supported = client.supported_pids().await.unwrap();
    // 0xBE = bits 1-5 and 7 of byte 0
    assert_eq!(&supported[..6], &[1, 2, 3, 4, 5, 7]);
    assert!(supported.iter().all(|&pid| pid < 0x20));
}

/// K-line buses print `BUS INIT: ...OK` before the first reply.
#[tokio::test]
async fn e2e_bus_init_banner() {
    let h = TestHarness::with_script(&["010D\rBUS INIT: ...OK\r41 0D 3C\r\r>"]);
    let (mut client, _adapter) = h.into_client();

    assert_eq!(
        client.read_pid(pids::VEHICLE_SPEED).await.unwrap(),
        Mode1Value::VehicleSpeed(60)
    );
}

#[tokio::test]
async fn e2e_monitor_status_spark() {
    let h = TestHarness::with_script(&[&obd_reply("0101", "41 01 00 07 65 00")]);
    let (mut client, _adapter) = h.into_client();

    let status = client.monitor_status().await.unwrap();
    assert!(!status.mil);
    assert_eq!(status.dtc_count, 0);
    assert!(status.misfire.available && status.misfire.complete);

    let spark = status.ignition.spark().expect("spark ignition");
    assert!(spark.catalyst.available && spark.catalyst.complete);
    assert!(!spark.heated_catalyst.available);
    assert!(spark.evap_system.available);
}

#[tokio::test]
async fn e2e_monitor_status_compression() {
    let h = TestHarness::with_script(&[&obd_reply("0101", "41 01 81 0F 00 00")]);
    let (mut client, _adapter) = h.into_client();

    let status = client.monitor_status().await.unwrap();
    assert!(status.mil);
    assert_eq!(status.dtc_count, 1);
    assert!(matches!(status.ignition, IgnitionMonitors::Compression(_)));
}

#[tokio::test]
async fn e2e_obd_standard() {
    let h = TestHarness::with_script(&[&obd_reply("011C", "41 1C 06")]);
    let (mut client, _adapter) = h.into_client();

    let value = client.read_pid(pids::OBD_STANDARD).await.unwrap();
    assert!(matches!(value, Mode1Value::ObdStandard(ref s) if s.is_known()));

    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["kind"], "obd_standard");
    assert_eq!(value, Mode1Value::ObdStandard(ObdStandard::from_byte(0x06)));
}

/// NO DATA from the vehicle is a typed error, not a decode failure.
#[tokio::test]
async fn e2e_no_data() {
    let h = TestHarness::with_script(&[&obd_reply("0110", "NO DATA")]);
    let (mut client, _adapter) = h.into_client();

    assert!(matches!(
        client.read_pid(pids::MAF_RATE).await,
        Err(ElmError::NoData)
    ));
}

/// A truncated payload is reported by the decoder without panicking.
#[tokio::test]
async fn e2e_truncated_payload() {
    let h = TestHarness::with_script(&[&obd_reply("010C", "41 0C 1A")]);
    let (mut client, _adapter) = h.into_client();

    assert!(matches!(
        client.read_pid(pids::ENGINE_RPM).await,
        Err(ElmError::Decode(DecodeError::TooShort { need: 2, got: 1, .. }))
    ));
}

/// An adapter that never prints its prompt trips the client deadline.
#[tokio::test(start_paused = true)]
async fn e2e_silent_adapter_times_out() {
    helpers::init_tracing();
    let (client_side, _adapter_side) = tokio::io::duplex(64);
    let mut client = Client::new(obd_elm327::Elm327::new(client_side));
    client.set_timeout(Some(Duration::from_millis(500)));

    assert!(matches!(
        client.read_pid(pids::ENGINE_RPM).await,
        Err(ElmError::Timeout { timeout_ms: 500 })
    ));
}

/// A disconnected adapter surfaces as an I/O error through the client.
#[tokio::test]
async fn e2e_unplugged_adapter() {
    helpers::init_tracing();
    let adapter = MockAdapter::new();
    adapter.fail_writes();
    let mut client = Client::new(obd_elm327::Elm327::new(adapter));

    assert!(matches!(
        client.read_pid(pids::ENGINE_LOAD).await,
        Err(ElmError::Io(_))
    ));
}
