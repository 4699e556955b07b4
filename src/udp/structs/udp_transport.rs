use std::net::{SocketAddr, UdpSocket};

/// Blocking UDP socket connected to a single tracker.
///
/// `socket` is `None` once the transport has been closed.
#[derive(Debug)]
pub struct UdpTransport {
    pub(crate) socket: Option<UdpSocket>,
    pub(crate) peer_addr: SocketAddr,
}
