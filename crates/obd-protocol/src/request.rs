//! Transport-agnostic OBD-II request/response pair.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Mode 01: Show current data (live PIDs).
pub const MODE_CURRENT_DATA: u8 = 0x01;

/// Offset added to request mode to get the positive response SID.
pub const RESPONSE_SID_OFFSET: u8 = 0x40;

/// A diagnostic command: one service mode plus its argument bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Request {
    mode: u8,
    args: Vec<u8>,
}

impl Request {
    pub fn new(mode: u8, args: impl Into<Vec<u8>>) -> Self {
        Self {
            mode,
            args: args.into(),
        }
    }

    /// Mode 01 request for a single PID.
    pub fn current_data(pid: u8) -> Self {
        Self::new(MODE_CURRENT_DATA, vec![pid])
    }

    pub fn mode(&self) -> u8 {
        self.mode
    }

    pub fn args(&self) -> &[u8] {
        &self.args
    }

    /// SID a positive response to this request starts with.
    pub fn response_sid(&self) -> u8 {
        self.mode.wrapping_add(RESPONSE_SID_OFFSET)
    }

    /// Mode followed by args, as sent on the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.args.len());
        bytes.push(self.mode);
        bytes.extend_from_slice(&self.args);
        bytes
    }
}

/// Raw payload returned for a request, with the SID and argument echo removed.
///
/// Its required length depends on the PID; the decoder checks it, not the
/// transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response(Vec<u8>);

impl Response {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Response {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Response {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_data_request() {
        let req = Request::current_data(0x0C);
        assert_eq!(req.mode(), MODE_CURRENT_DATA);
        assert_eq!(req.args(), &[0x0C]);
        assert_eq!(req.response_sid(), 0x41);
        assert_eq!(req.to_bytes(), vec![0x01, 0x0C]);
    }

    #[test]
    fn response_derefs_to_slice() {
        let resp = Response::new([0x1A, 0xF8]);
        assert_eq!(resp.len(), 2);
        assert_eq!(resp[0], 0x1A);
        assert_eq!(resp.as_bytes(), &[0x1A, 0xF8]);
    }
}
