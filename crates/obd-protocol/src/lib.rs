//! Pure OBD-II protocol types shared by transports and clients.
//!
//! Nothing in this crate performs I/O: it builds requests, decodes Mode 01
//! payloads into typed values and converts trouble codes to and from text.

pub mod dtc;
pub mod error;
pub mod mode1;
pub mod request;

pub use dtc::{Dtc, DtcCategory, DtcSystem, DtcType};
pub use error::{DecodeError, DtcError, DtcResult};
pub use mode1::Mode1Value;
pub use request::{MODE_CURRENT_DATA, RESPONSE_SID_OFFSET, Request, Response};
