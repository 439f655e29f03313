use std::io::Write;

use keywords_logging::{kw_trace, kw_warn};

use crate::protocol::{encode_outbound, OutboundMessage, API_VERSION};
use crate::BridgeError;

/// Outbound notifications to the host process.
///
/// Calls are fire-and-forget: there is no acknowledgement and implementations
/// must tolerate the same value being pushed repeatedly.
pub trait HostBridge {
    /// Current authoritative token list.
    fn report_value(&mut self, tokens: &[String]);

    /// Pixel height of the last render pass.
    fn report_rendered_height(&mut self, height: u32);

    /// Handshake sent once before the first render.
    fn announce_ready(&mut self) {}
}

/// Writes each notification as one JSON line and mirrors what the host last saw.
pub struct JsonLinesBridge<W: Write> {
    writer: W,
    last_value: Vec<String>,
    last_height: Option<u32>,
}

impl<W: Write> JsonLinesBridge<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_value: Vec::new(),
            last_height: None,
        }
    }

    /// Token list from the most recent value push that was written successfully.
    pub fn last_value(&self) -> &[String] {
        &self.last_value
    }

    pub fn last_height(&self) -> Option<u32> {
        self.last_height
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn send(&mut self, message: &OutboundMessage) -> Result<(), BridgeError> {
        let line = encode_outbound(message)?;
        kw_trace!("-> host {}", line);
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Sends `message`; failures are logged and reported as `false`.
    fn send_or_log(&mut self, message: &OutboundMessage) -> bool {
        match self.send(message) {
            Ok(()) => true,
            Err(err) => {
                kw_warn!("Host notification dropped: {}", err);
                false
            }
        }
    }
}

impl<W: Write> HostBridge for JsonLinesBridge<W> {
    fn report_value(&mut self, tokens: &[String]) {
        if self.send_or_log(&OutboundMessage::value(tokens)) {
            self.last_value = tokens.to_vec();
        }
    }

    fn report_rendered_height(&mut self, height: u32) {
        if self.send_or_log(&OutboundMessage::SetFrameHeight { height }) {
            self.last_height = Some(height);
        }
    }

    fn announce_ready(&mut self) {
        self.send_or_log(&OutboundMessage::ComponentReady {
            api_version: API_VERSION,
        });
    }
}
