//! Adapter housekeeping commands built on [`Elm327::send_at`].

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use crate::error::{ElmError, ElmResult};
use crate::protocol::ObdProtocol;
use crate::transport::Elm327;

/// Device description (`AT@1`).
pub const DESCRIPTION: &str = "@1";
/// Device identifier (`AT@2`).
pub const IDENTIFIER: &str = "@2";
/// Read input voltage (`ATRV`).
pub const READ_VOLTAGE: &str = "RV";
/// Calibrate voltage (`ATCV dddd`).
pub const CALIBRATE_VOLTAGE: &str = "CV";
/// Ignition monitor input level (`ATIGN`).
pub const IGNITION: &str = "IGN";
/// Full device reset (`ATZ`).
pub const RESET: &str = "Z";

/// Largest voltage `ATCV` accepts.
pub const MAX_CALIBRATION_VOLTS: f64 = 99.99;

/// Parse an `ATRV` reply such as `12.3V`.
pub fn parse_voltage(response: &str) -> ElmResult<f64> {
    let digits = response.strip_suffix('V').unwrap_or(response);
    digits.parse::<f64>().map_err(|source| ElmError::ParseVoltage {
        response: response.to_owned(),
        source,
    })
}

/// Four-digit `ATCV` argument for `volts`, e.g. `12.34` → `1234`.
pub fn calibration_code(volts: f64) -> ElmResult<String> {
    if !(0.0..=MAX_CALIBRATION_VOLTS).contains(&volts) {
        return Err(ElmError::InvalidVoltage(volts));
    }
    // abs() turns -0.0 into 0.0, which would otherwise format with a sign
    Ok(format!("{:05.2}", volts.abs()).replacen('.', "", 1))
}

impl<R, W> Elm327<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Device description, verbatim.
    pub async fn description(&mut self) -> ElmResult<String> {
        self.send_at(DESCRIPTION).await
    }

    /// Device identifier, verbatim.
    pub async fn identifier(&mut self) -> ElmResult<String> {
        self.send_at(IDENTIFIER).await
    }

    /// Voltage at the adapter's supply pin.
    pub async fn read_voltage(&mut self) -> ElmResult<f64> {
        let response = self.send_at(READ_VOLTAGE).await?;
        parse_voltage(&response)
    }

    /// Calibrate the voltage reading to `volts` (two decimals).
    /// `0.0` restores the factory calibration.
    ///
    /// Out-of-range values are rejected before anything is written.
    pub async fn calibrate_voltage(&mut self, volts: f64) -> ElmResult<()> {
        let code = calibration_code(volts)?;
        self.send_at(&format!("{CALIBRATE_VOLTAGE} {code}")).await?;
        info!(volts, "adapter voltage calibrated");
        Ok(())
    }

    /// Whether the ignition monitor input reads `ON`.
    pub async fn ignition_state(&mut self) -> ElmResult<bool> {
        let response = self.send_at(IGNITION).await?;
        Ok(response == "ON")
    }

    /// Reset the adapter. The banner it prints is discarded.
    pub async fn reset(&mut self) -> ElmResult<()> {
        self.send_at(RESET).await?;
        info!("adapter reset");
        Ok(())
    }

    pub async fn set_echo(&mut self, enabled: bool) -> ElmResult<()> {
        self.send_at(if enabled { "E1" } else { "E0" }).await?;
        Ok(())
    }

    pub async fn set_protocol(&mut self, protocol: ObdProtocol) -> ElmResult<()> {
        self.send_at(&protocol.at_command()).await?;
        info!(?protocol, can = protocol.is_can(), "adapter protocol set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockAdapter;

    #[test]
    fn voltage_with_unit_suffix() {
        assert_eq!(parse_voltage("12.3V").unwrap(), 12.3);
        assert_eq!(parse_voltage("14.1").unwrap(), 14.1);
    }

    #[test]
    fn malformed_voltage() {
        let err = parse_voltage("V").unwrap_err();
        assert!(matches!(err, ElmError::ParseVoltage { ref response, .. } if response == "V"));
        assert!(parse_voltage("12.3VV").is_err());
    }

    #[test]
    fn calibration_codes() {
        assert_eq!(calibration_code(0.0).unwrap(), "0000");
        assert_eq!(calibration_code(12.34).unwrap(), "1234");
        assert_eq!(calibration_code(5.0).unwrap(), "0500");
        assert_eq!(calibration_code(99.99).unwrap(), "9999");
        assert_eq!(calibration_code(-0.0).unwrap(), "0000");
    }

    #[test]
    fn calibration_rejects_out_of_range() {
        assert!(matches!(calibration_code(100.0), Err(ElmError::InvalidVoltage(_))));
        assert!(matches!(calibration_code(-0.5), Err(ElmError::InvalidVoltage(_))));
        assert!(matches!(calibration_code(f64::NAN), Err(ElmError::InvalidVoltage(_))));
    }

    #[tokio::test]
    async fn read_voltage_over_wire() {
        let mock = MockAdapter::with_script(&["ATRV\r12.3V\r\r>"]);
        let mut elm = Elm327::new(mock);
        assert_eq!(elm.read_voltage().await.unwrap(), 12.3);
    }

    #[tokio::test]
    async fn calibrate_sends_code() {
        let mock = MockAdapter::with_script(&["OK\r>", "OK\r>"]);
        let mut elm = Elm327::new(mock.clone());

        elm.calibrate_voltage(0.0).await.unwrap();
        assert_eq!(mock.take_written(), "ATCV 0000\r");

        elm.calibrate_voltage(12.34).await.unwrap();
        assert_eq!(mock.take_written(), "ATCV 1234\r");
    }

    #[tokio::test]
    async fn calibrate_out_of_range_writes_nothing() {
        let mock = MockAdapter::new();
        let mut elm = Elm327::new(mock.clone());

        let err = elm.calibrate_voltage(100.0).await.unwrap_err();
        assert!(matches!(err, ElmError::InvalidVoltage(v) if v == 100.0));
        assert!(mock.written().is_empty());
    }

    #[tokio::test]
    async fn ignition_on_and_off() {
        let mock = MockAdapter::with_script(&["ON\r>", "OFF\r>"]);
        let mut elm = Elm327::new(mock.clone());

        assert!(elm.ignition_state().await.unwrap());
        assert!(!elm.ignition_state().await.unwrap());
        assert_eq!(mock.take_written(), "ATIGN\r\r");
    }

    #[tokio::test]
    async fn ignition_surfaces_transport_errors() {
        let mut elm = Elm327::new(MockAdapter::new());
        assert!(matches!(
            elm.ignition_state().await,
            Err(ElmError::MissingPrompt)
        ));
    }

    #[tokio::test]
    async fn identification_strings_are_verbatim() {
        let mock = MockAdapter::with_script(&["ELM327 v2.1 clone\r>", "SN-0042\r>"]);
        let mut elm = Elm327::new(mock.clone());

        assert_eq!(elm.description().await.unwrap(), "ELM327 v2.1 clone");
        assert_eq!(elm.identifier().await.unwrap(), "SN-0042");
        assert_eq!(mock.take_written(), "AT@1\rAT@2\r");
    }

    #[tokio::test]
    async fn reset_discards_banner() {
        let mock = MockAdapter::with_script(&["ATZ\r\r\rELM327 v1.5\r\r>"]);
        let mut elm = Elm327::new(mock.clone());
        elm.reset().await.unwrap();
        assert_eq!(mock.take_written(), "ATZ\r");
    }

    #[tokio::test]
    async fn session_setup_commands() {
        let mock = MockAdapter::with_script(&["OK\r>", "OK\r>"]);
        let mut elm = Elm327::new(mock.clone());

        elm.set_echo(false).await.unwrap();
        elm.set_protocol(ObdProtocol::Iso15765_4Can11bit500).await.unwrap();
        assert_eq!(mock.take_written(), "ATE0\rATSP6\r");
    }
}
