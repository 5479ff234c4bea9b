//! OBD-II Mode 01 (current data): PID table, scaling formulas and the
//! structured status values some PIDs carry.

pub mod decode;
pub mod pids;
pub mod status;
mod value;

pub use decode::*;
pub use pids::PidInfo;
pub use status::*;
pub use value::{Mode1Value, decode_pid};

/// Service ID for every Mode 01 request.
pub const ID: u8 = crate::request::MODE_CURRENT_DATA;
