//! Realtime demo channel.
//!
//! A plain text-frame WebSocket widget, unrelated to the contract workflow:
//! every inbound frame is appended verbatim to a log, outbound messages are
//! typed into an input slot and sent as-is. `ChatLog` holds the observable
//! state so the send/receive rules are testable without a socket;
//! `ChatChannel` wires it to a tokio-tungstenite connection.

#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    log: Vec<String>,
    input: String,
    open: bool,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.log
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn opened(&mut self) {
        self.open = true;
        self.log.push("WebSocket connected".to_string());
    }

    pub fn message_received(&mut self, text: &str) {
        self.log.push(format!("Message from server: {text}"));
    }

    pub fn errored(&mut self, kind: &str) {
        self.log.push(format!("WebSocket error type: {kind}"));
    }

    pub fn closed(&mut self) {
        self.open = false;
        self.log.push("WebSocket closed".to_string());
    }

    /// Take the input for sending. While open: logs exactly one "Sent: ..."
    /// line, clears the input and returns the message. While closed: no log
    /// line, input untouched, nothing to send.
    pub fn send(&mut self) -> Option<String> {
        if !self.open {
            return None;
        }
        let message = std::mem::take(&mut self.input);
        self.log.push(format!("Sent: {message}"));
        Some(message)
    }
}

#[cfg(feature = "no-wasm")]
pub use transport::ChatChannel;

#[cfg(feature = "no-wasm")]
mod transport {
    use super::ChatLog;
    use crate::error::Result;
    use futures_util::{SinkExt, StreamExt};
    use tokio::net::TcpStream;
    use tokio_tungstenite::{
        connect_async, tungstenite::protocol::Message, MaybeTlsStream, WebSocketStream,
    };

    pub struct ChatChannel {
        stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
        pub log: ChatLog,
    }

    impl ChatChannel {
        pub async fn connect(url: &str) -> Result<Self> {
            let (stream, _) = connect_async(url).await?;
            let mut log = ChatLog::new();
            log.opened();
            Ok(Self { stream, log })
        }

        pub fn set_input(&mut self, text: &str) {
            self.log.set_input(text);
        }

        /// Send the current input as one text frame. The log line and input
        /// clear happen only after the frame went out.
        pub async fn send(&mut self) -> Result<()> {
            if !self.log.is_open() {
                return Ok(());
            }
            let message = self.log.input().to_string();
            self.stream.send(Message::Text(message)).await?;
            self.log.send();
            Ok(())
        }

        /// Wait for the next text frame. Returns None once the peer closes.
        pub async fn recv(&mut self) -> Result<Option<String>> {
            while let Some(frame) = self.stream.next().await {
                match frame? {
                    Message::Text(text) => {
                        self.log.message_received(&text);
                        return Ok(Some(text));
                    }
                    Message::Close(_) => {
                        self.log.closed();
                        return Ok(None);
                    }
                    _ => continue,
                }
            }
            self.log.closed();
            Ok(None)
        }

        /// Explicit teardown; the socket is the one resource this app
        /// disposes of deliberately.
        pub async fn close(&mut self) -> Result<()> {
            self.stream.close(None).await?;
            self.log.closed();
            Ok(())
        }
    }
}
