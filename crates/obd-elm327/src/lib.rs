//! ELM327 adapter sessions and an OBD-II Mode 01 client.
//!
//! `Elm327` frames AT commands and hex OBD requests over any async byte
//! stream. `Client` drives any [`Transport`] and decodes replies with
//! `obd_protocol`. The mocks in [`mock`] let everything run without hardware.

pub mod at;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod mock;
pub mod protocol;
pub mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ElmError, ElmResult};
pub use interface::Transport;
pub use mock::{MockAdapter, MockTransport};
pub use protocol::ObdProtocol;
pub use transport::Elm327;
