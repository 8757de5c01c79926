use futures::future::{select, Either};
use futures::{pin_mut, SinkExt, StreamExt};
use gloo::net::websocket::{futures::WebSocket, Message};
use gloo::timers::future::TimeoutFuture;
use shared::{AppointmentRequest, BookingAck, SubmitError};

use crate::config::{self, TransportKind};
use crate::services::api::ApiClient;

/// Bounded wait for the connection to open and the payload to flush.
pub const CONNECT_TIMEOUT_MS: u32 = 5_000;
/// Independent bounded wait for the server acknowledgement.
pub const ACK_TIMEOUT_MS: u32 = 5_000;

/// The reservation transport: one `submit` contract, with the concrete
/// mechanism (request/response or connection-oriented) picked by the
/// deployment configuration.
pub enum BookingTransport {
    Http(ApiClient),
    Socket(SocketTransport),
}

impl BookingTransport {
    pub fn from_config() -> Self {
        match config::transport_kind() {
            TransportKind::Http => BookingTransport::Http(ApiClient::new()),
            TransportKind::Socket => BookingTransport::Socket(SocketTransport::new()),
        }
    }

    pub async fn submit(&self, request: &AppointmentRequest) -> Result<(), SubmitError> {
        match self {
            BookingTransport::Http(client) => client.request_appointment(request).await,
            BookingTransport::Socket(socket) => socket.submit(request).await,
        }
    }
}

/// Connection-oriented request/acknowledgement exchange over a WebSocket
/// opened for the single submission.
pub struct SocketTransport {
    endpoint: String,
}

impl SocketTransport {
    pub fn new() -> Self {
        Self {
            endpoint: format!(
                "{}/appointment-requests/socket",
                config::ws_origin(&config::api_origin())
            ),
        }
    }

    fn open(&self) -> Result<WebSocket, SubmitError> {
        // Primary framing first, then the alternate scheme framing when the
        // primary cannot be established.
        WebSocket::open(&self.endpoint)
            .or_else(|_| WebSocket::open(&alternate_framing(&self.endpoint)))
            .map_err(|e| SubmitError::Network(e.to_string()))
    }

    /// Emit the booking payload and wait for the acknowledgement. The socket
    /// is released on every exit path, timeouts included, before the outcome
    /// is surfaced.
    pub async fn submit(&self, request: &AppointmentRequest) -> Result<(), SubmitError> {
        let mut socket = self.open()?;
        let outcome = exchange(&mut socket, request).await;
        let _ = socket.close(Some(1000), None);
        outcome
    }
}

impl Default for SocketTransport {
    fn default() -> Self {
        Self::new()
    }
}

async fn exchange(
    socket: &mut WebSocket,
    request: &AppointmentRequest,
) -> Result<(), SubmitError> {
    let payload =
        serde_json::to_string(request).map_err(|e| SubmitError::Network(e.to_string()))?;

    // The send only resolves once the socket is open, so a single bound
    // covers connect + emit.
    let send = socket.send(Message::Text(payload));
    pin_mut!(send);
    match select(send, TimeoutFuture::new(CONNECT_TIMEOUT_MS)).await {
        Either::Left((Ok(()), _)) => {}
        Either::Left((Err(e), _)) => return Err(SubmitError::Network(e.to_string())),
        Either::Right(_) => return Err(SubmitError::ConnectTimeout),
    }

    let deadline = TimeoutFuture::new(ACK_TIMEOUT_MS);
    pin_mut!(deadline);
    loop {
        let next = socket.next();
        pin_mut!(next);
        match select(next, deadline.as_mut()).await {
            Either::Left((Some(Ok(Message::Text(text))), _)) => {
                // Messages that are not an acknowledgement are skipped.
                if let Ok(ack) = serde_json::from_str::<BookingAck>(&text) {
                    return if ack.success {
                        Ok(())
                    } else {
                        Err(SubmitError::Rejected(ack.message.unwrap_or_default()))
                    };
                }
            }
            Either::Left((Some(Ok(Message::Bytes(_))), _)) => {}
            Either::Left((Some(Err(e)), _)) => return Err(SubmitError::Network(e.to_string())),
            Either::Left((None, _)) => {
                return Err(SubmitError::Network(
                    "connection closed before acknowledgement".into(),
                ))
            }
            Either::Right(_) => return Err(SubmitError::AckTimeout),
        }
    }
}

fn alternate_framing(endpoint: &str) -> String {
    if let Some(rest) = endpoint.strip_prefix("wss://") {
        format!("ws://{rest}")
    } else if let Some(rest) = endpoint.strip_prefix("ws://") {
        format!("wss://{rest}")
    } else {
        endpoint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn alternate_framing_flips_the_scheme() {
        assert_eq!(
            alternate_framing("ws://clinic.example.com/appointment-requests/socket"),
            "wss://clinic.example.com/appointment-requests/socket"
        );
        assert_eq!(
            alternate_framing("wss://clinic.example.com/appointment-requests/socket"),
            "ws://clinic.example.com/appointment-requests/socket"
        );
    }
}
