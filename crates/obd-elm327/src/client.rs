//! Mode 01 client over any [`Transport`].
//!
//! The client owns the only deadline in the stack: the transport waits for
//! the prompt indefinitely, so each round trip is wrapped in
//! `tokio::time::timeout` here. There are no retries.

use std::time::Duration;

use obd_protocol::mode1::{self, MonitorStatus, pids};
use obd_protocol::{Mode1Value, Request, Response};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ElmError, ElmResult};
use crate::interface::Transport;

/// OBD-II client decoding Mode 01 responses.
pub struct Client<T> {
    transport: T,
    timeout: Option<Duration>,
}

impl<T: Transport> Client<T> {
    /// Client with the default config (2 s deadline).
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &ClientConfig::default())
    }

    pub fn with_config(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            timeout: config.request_timeout(),
        }
    }

    /// Replace the per-request deadline. `None` waits indefinitely.
    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Send one request and return its raw payload.
    pub async fn round_trip(&mut self, request: &Request) -> ElmResult<Response> {
        let Some(limit) = self.timeout else {
            return self.transport.round_trip(request).await;
        };
        match tokio::time::timeout(limit, self.transport.round_trip(request)).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
                warn!(
                    mode = request.mode(),
                    args = ?request.args(),
                    timeout_ms,
                    "request timed out"
                );
                Err(ElmError::Timeout { timeout_ms })
            }
        }
    }

    /// Raw Mode 01 payload for `pid`.
    pub async fn current_data(&mut self, pid: u8) -> ElmResult<Response> {
        self.round_trip(&Request::current_data(pid)).await
    }

    /// Read and decode one Mode 01 PID.
    pub async fn read_pid(&mut self, pid: u8) -> ElmResult<Mode1Value> {
        let response = self.current_data(pid).await?;
        let value = mode1::decode_pid(pid, &response)?;
        debug!(pid, ?value, "decoded PID");
        Ok(value)
    }

    /// PIDs 0x00–0x1F flagged in the PID 0x00 bitmap.
    pub async fn supported_pids(&mut self) -> ElmResult<Vec<u8>> {
        match self.read_pid(pids::SUPPORTED_PIDS_01_20).await? {
            Mode1Value::SupportedPids(list) => Ok(list),
            other => Err(ElmError::MalformedResponse(format!(
                "unexpected value for PID 0x00: {other:?}"
            ))),
        }
    }

    /// Monitor status since DTCs were cleared (PID 0x01).
    pub async fn monitor_status(&mut self) -> ElmResult<MonitorStatus> {
        match self.read_pid(pids::MONITOR_STATUS).await? {
            Mode1Value::MonitorStatus(status) => Ok(status),
            other => Err(ElmError::MalformedResponse(format!(
                "unexpected value for PID 0x01: {other:?}"
            ))),
        }
    }
}
