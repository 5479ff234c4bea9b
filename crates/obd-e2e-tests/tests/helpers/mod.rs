//! Shared test harness for E2E integration tests.
//!
//! Wires a real `Elm327` session to a scripted `MockAdapter`, so tests go
//! through the full framing, hex parsing and decoding path.

#![allow(dead_code)]

use std::sync::Once;

use obd_elm327::{Client, Elm327, MockAdapter};
use tokio::io::{BufReader, ReadHalf, WriteHalf};
use tracing_subscriber::EnvFilter;

/// Adapter session type produced by `Elm327::new` over the mock.
pub type MockSession = Elm327<BufReader<ReadHalf<MockAdapter>>, WriteHalf<MockAdapter>>;

static TRACING: Once = Once::new();

/// Install a JSON subscriber writing through the test harness. Honors
/// `RUST_LOG`; silent otherwise.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .json()
            .with_test_writer()
            .try_init();
    });
}

/// End-to-end harness: one adapter session plus a handle on its wire.
pub struct TestHarness {
    /// Shared view of the mock adapter (queue replies, inspect writes).
    pub adapter: MockAdapter,
    pub session: MockSession,
}

impl TestHarness {
    /// Session over an adapter that will print `replies` in order.
    pub fn with_script(replies: &[&str]) -> Self {
        init_tracing();
        let adapter = MockAdapter::with_script(replies);
        let session = Elm327::new(adapter.clone());
        Self { adapter, session }
    }

    /// Hand the session to a `Client`, keeping the wire handle.
    pub fn into_client(self) -> (Client<MockSession>, MockAdapter) {
        (Client::new(self.session), self.adapter)
    }

    /// Everything written since the last call.
    pub fn wire(&self) -> String {
        self.adapter.take_written()
    }
}

/// Adapter reply to an OBD request: echo, hex bytes, blank line, prompt.
pub fn obd_reply(echo: &str, hex: &str) -> String {
    format!("{echo}\r{hex} \r\r>")
}
