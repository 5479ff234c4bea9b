//! ELM327 command framing over any async byte stream.
//!
//! One command per call: the line is written, bytes are read up to the
//! adapter's `>` prompt, and the echo, prompt and NUL padding are stripped.
//! A line identical to the previous one is replaced by a bare `\r`, which
//! the adapter treats as "repeat last command".
//!
//! The remembered line is per-instance state mutated through `&mut self`.
//! Tasks sharing one adapter must serialise access (e.g. a `tokio::sync::Mutex`).

use async_trait::async_trait;
use obd_protocol::{Request, Response};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf,
    WriteHalf,
};
use tracing::{debug, trace, warn};

use crate::error::{ElmError, ElmResult};
use crate::interface::Transport;

/// Prompt byte the adapter prints when it is ready for the next command.
pub const PROMPT: u8 = b'>';

/// Line sent instead of an exact repeat of the previous one.
pub const REPEAT_LINE: &str = "\r";

/// Adapter reply to a command it does not understand.
const UNKNOWN_COMMAND: &str = "?";

/// An ELM327 adapter session.
pub struct Elm327<R, W> {
    reader: R,
    writer: W,
    last_line: Option<String>,
}

impl<S> Elm327<BufReader<ReadHalf<S>>, WriteHalf<S>>
where
    S: AsyncRead + AsyncWrite,
{
    /// Wrap a duplex stream (serial port, TCP socket, ...). The read half is
    /// buffered once here; every later read is a plain read-until-prompt.
    pub fn new(stream: S) -> Self {
        let (read, write) = tokio::io::split(stream);
        Self::from_parts(BufReader::new(read), write)
    }
}

impl<R, W> Elm327<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Build from a reader that already buffers and a separate writer.
    pub fn from_parts(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            last_line: None,
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// The last full line written, including its trailing `\r`.
    pub fn last_line(&self) -> Option<&str> {
        self.last_line.as_deref()
    }

    /// Send `AT<command>` and return the adapter's trimmed reply.
    pub async fn send_at(&mut self, command: &str) -> ElmResult<String> {
        self.exchange(format!("AT{command}\r")).await
    }

    /// Write one line (or the repeat shortcut) and read the reply.
    ///
    /// OBD requests go through here too: the adapter repeats whatever line
    /// came last, so every line sent must update the remembered one.
    pub(crate) async fn exchange(&mut self, line: String) -> ElmResult<String> {
        let repeat = self.last_line.as_deref() == Some(line.as_str());
        let sent = if repeat { REPEAT_LINE } else { line.as_str() };
        debug!(line = %line.trim_end(), repeat, "sending adapter command");

        self.writer.write_all(sent.as_bytes()).await?;
        self.writer.flush().await?;
        let sent = sent.to_owned();
        if !repeat {
            self.last_line = Some(line.clone());
        }

        let mut buf = Vec::new();
        self.reader.read_until(PROMPT, &mut buf).await?;
        if buf.pop() != Some(PROMPT) {
            return Err(ElmError::MissingPrompt);
        }

        let raw = String::from_utf8_lossy(&buf);
        trace!(raw = ?raw, "adapter response");
        let text = clean_response(&raw, &sent);

        if text == UNKNOWN_COMMAND {
            let command = line.trim_end().to_owned();
            warn!(%command, "adapter rejected command");
            return Err(ElmError::UnknownCommand { command });
        }
        Ok(text)
    }
}

/// Drop NUL padding, the echoed line if present, and surrounding whitespace.
fn clean_response(raw: &str, sent: &str) -> String {
    let without_nul: String = raw.chars().filter(|&c| c != '\0').collect();
    let body = without_nul.strip_prefix(sent).unwrap_or(&without_nul);
    body.trim().to_owned()
}

/// Hex line for an OBD request, e.g. `010C\r`.
pub fn encode_request(request: &Request) -> String {
    let mut line: String = request
        .to_bytes()
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect();
    line.push('\r');
    line
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 || !s.is_ascii() {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}

/// Extract the payload for `request` from the adapter's text reply.
///
/// The first line starting with the positive response SID followed by the
/// request arguments wins; its remaining bytes are the payload. Lines that
/// are not hex are skipped.
pub fn parse_obd_response(request: &Request, text: &str) -> ElmResult<Response> {
    let mut header = vec![request.response_sid()];
    header.extend_from_slice(request.args());

    for line in text.split(['\r', '\n']) {
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if compact == "NODATA" {
            return Err(ElmError::NoData);
        }
        // Status text such as `SEARCHING...` or `BUS INIT: ...OK` is not hex.
        let Some(bytes) = decode_hex(&compact) else {
            trace!(line = line.trim(), "skipping non-data line");
            continue;
        };
        if let Some(payload) = bytes.strip_prefix(header.as_slice()) {
            return Ok(Response::new(payload));
        }
    }

    Err(ElmError::MalformedResponse(format!(
        "no 0x{:02X} response in \"{}\"",
        request.response_sid(),
        text.trim()
    )))
}

#[async_trait]
impl<R, W> Transport for Elm327<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn round_trip(&mut self, request: &Request) -> ElmResult<Response> {
        let text = self.exchange(encode_request(request)).await?;
        parse_obd_response(request, &text)
    }
}
