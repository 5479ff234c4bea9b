//! Request/response transport abstraction.
//!
//! `Transport` performs one OBD-II round trip. Two impls:
//! - `Elm327`: hex lines over the adapter's AT-command interface (in `transport.rs`)
//! - `MockTransport`: all platforms, scripted responses (in `mock.rs`)

use async_trait::async_trait;
use obd_protocol::{Request, Response};

use crate::error::ElmResult;

/// Trait for OBD-II request/response transports.
///
/// Takes `&mut self`: a transport is driven by one owner at a time.
#[async_trait]
pub trait Transport: Send {
    /// Send `request` and return the payload with SID and argument echo removed.
    async fn round_trip(&mut self, request: &Request) -> ElmResult<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn round_trip(&mut self, request: &Request) -> ElmResult<Response> {
        (**self).round_trip(request).await
    }
}
