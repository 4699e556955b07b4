use std::io;
use std::time::Duration;
use log::{debug, info};
use crate::udp::enums::action::Action;
use crate::udp::enums::tracker_client_error::TrackerClientError;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::connection_state::ConnectionState;
use crate::udp::structs::tracker_connection::TrackerConnection;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::traits::transport::Transport;
use crate::udp::udp::{decode_response, encode_connect, read_connection_id, CONNECTION_ID_LIFETIME, CONNECT_RESPONSE_SIZE, MAX_PACKET_SIZE};

impl<T: Transport> TrackerConnection<T> {
    pub fn new(transport: T) -> TrackerConnection<T> {
        TrackerConnection {
            transport,
            state: None,
            connection_id_lifetime: CONNECTION_ID_LIFETIME,
            closed: false,
        }
    }

    pub fn with_connection_id_lifetime(mut self, lifetime: Duration) -> TrackerConnection<T> {
        self.connection_id_lifetime = lifetime;
        self
    }

    pub fn connection_id_lifetime(&self) -> Duration {
        self.connection_id_lifetime
    }

    pub fn connection_state(&self) -> Option<&ConnectionState> {
        self.state.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Forgets the cached connection ID so the next `connect` shakes hands again.
    pub fn invalidate(&mut self) {
        self.state = None;
    }

    /// Returns a connection ID that is valid right now.
    ///
    /// A cached ID younger than the lifetime is returned without any I/O.
    /// Otherwise a connect round trip is made; the cache is only replaced
    /// when that round trip fully succeeds.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn connect(&mut self) -> Result<ConnectionId, TrackerClientError> {
        if let Some(state) = &self.state {
            if state.is_valid(self.connection_id_lifetime) {
                debug!("[CONNECT] Reusing connection ID {} ({:?} old)", state.connection_id, state.age());
                return Ok(state.connection_id);
            }
            debug!("[CONNECT] Connection ID {} expired", state.connection_id);
        }

        let (request, transaction_id) = encode_connect();
        let response = self.exchange(&request, Action::Connect, transaction_id, CONNECT_RESPONSE_SIZE)?;
        let connection_id = read_connection_id(&response)?;

        info!("[CONNECT] Received connection ID {connection_id}");
        self.state = Some(ConnectionState::new(connection_id));
        Ok(connection_id)
    }

    /// Sends one encoded request and waits for the matching response.
    ///
    /// Exactly one send and one receive. The returned bytes already passed
    /// [`decode_response`] for `action`, `transaction_id` and
    /// `expected_length`.
    pub fn exchange(&mut self, request: &[u8], action: Action, transaction_id: TransactionId, expected_length: usize) -> Result<Vec<u8>, TrackerClientError> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "tracker connection is closed").into());
        }

        debug!("[UDP] Sending {action} request ({} bytes, transaction {transaction_id})", request.len());
        let sent = self.transport.send(request)?;
        if sent != request.len() {
            return Err(io::Error::new(io::ErrorKind::WriteZero, format!("sent {sent} of {} bytes", request.len())).into());
        }

        let mut buffer = vec![0u8; expected_length.max(MAX_PACKET_SIZE)];
        let received = self.transport.recv(&mut buffer)?;
        buffer.truncate(received);
        debug!("[UDP] Received {received} bytes");

        decode_response(&buffer, action, transaction_id, expected_length)?;
        Ok(buffer)
    }

    /// Releases the transport. Once it succeeds, calling it again is a no-op.
    ///
    /// A failed transport close leaves the connection open, so `close` can
    /// be retried.
    pub fn close(&mut self) -> Result<(), TrackerClientError> {
        if self.closed {
            return Ok(());
        }
        self.transport.close()?;
        self.closed = true;
        self.state = None;
        debug!("[UDP] Tracker connection closed");
        Ok(())
    }
}
