//! Mock adapters for testing.
//!
//! `MockAdapter` is a scripted byte stream that stands in for a serial port,
//! so the full `Elm327` framing is exercised. `MockTransport` skips framing
//! and hands back queued responses. Neither needs hardware, so the suite runs
//! in CI on any platform.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};

use obd_protocol::{Request, Response};
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

use crate::error::{ElmError, ElmResult};
use crate::interface::Transport;

#[derive(Default)]
struct AdapterState {
    /// Bytes the adapter will "print", in order.
    rx: VecDeque<u8>,
    /// Everything the host wrote.
    written: Vec<u8>,
    fail_writes: bool,
    fail_reads: bool,
}

/// Scripted in-memory adapter stream.
///
/// Clones share state: hand one clone to `Elm327::new` and keep another to
/// queue replies and inspect what was written. Once the script runs dry,
/// reads return end-of-stream.
#[derive(Clone, Default)]
pub struct MockAdapter {
    state: Arc<Mutex<AdapterState>>,
}

impl MockAdapter {
    /// Create a mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with adapter output, one chunk per reply.
    pub fn with_script(replies: &[&str]) -> Self {
        let mock = Self::new();
        for reply in replies {
            mock.queue_response(reply);
        }
        mock
    }

    /// Queue more adapter output.
    pub fn queue_response(&self, reply: &str) {
        self.state().rx.extend(reply.as_bytes());
    }

    /// All bytes written so far.
    pub fn written(&self) -> Vec<u8> {
        self.state().written.clone()
    }

    /// Drain the written bytes as text.
    pub fn take_written(&self) -> String {
        let bytes = std::mem::take(&mut self.state().written);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Make every later write fail with `BrokenPipe`.
    pub fn fail_writes(&self) {
        self.state().fail_writes = true;
    }

    /// Make every later read fail with `ConnectionReset`.
    pub fn fail_reads(&self) {
        self.state().fail_reads = true;
    }

    fn state(&self) -> MutexGuard<'_, AdapterState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl AsyncRead for MockAdapter {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let mut state = self.state();
        if state.fail_reads {
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "mock adapter stopped responding",
            )));
        }
        let n = state.rx.len().min(buf.remaining());
        let chunk: Vec<u8> = state.rx.drain(..n).collect();
        buf.put_slice(&chunk);
        Poll::Ready(Ok(()))
    }
}

impl AsyncWrite for MockAdapter {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        data: &[u8],
    ) -> Poll<io::Result<usize>> {
        let mut state = self.state();
        if state.fail_writes {
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "mock adapter unplugged",
            )));
        }
        state.written.extend_from_slice(data);
        Poll::Ready(Ok(data.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// Mock transport with queued responses and request recording.
#[derive(Default)]
pub struct MockTransport {
    /// Queued results returned by `round_trip` (FIFO order).
    responses: VecDeque<ElmResult<Response>>,
    /// All requests passed to `round_trip` (for test assertions).
    requests: Vec<Request>,
    /// Never answer, as a vehicle that has gone silent.
    stalled: bool,
}

impl MockTransport {
    /// Create a new mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with payloads.
    pub fn with_payloads(payloads: &[&[u8]]) -> Self {
        let mut mock = Self::new();
        for payload in payloads {
            mock.queue_payload(payload);
        }
        mock
    }

    /// A mock whose round trips never complete.
    pub fn stalled() -> Self {
        Self {
            stalled: true,
            ..Self::default()
        }
    }

    pub fn queue_payload(&mut self, payload: &[u8]) {
        self.responses.push_back(Ok(Response::new(payload)));
    }

    pub fn queue_error(&mut self, err: ElmError) {
        self.responses.push_back(Err(err));
    }

    /// Requests seen so far.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn round_trip(&mut self, request: &Request) -> ElmResult<Response> {
        self.requests.push(request.clone());
        if self.stalled {
            std::future::pending::<()>().await;
        }
        // An exhausted script behaves like an adapter that stopped talking.
        self.responses
            .pop_front()
            .unwrap_or(Err(ElmError::MissingPrompt))
    }
}
