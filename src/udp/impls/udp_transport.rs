use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;
use log::debug;
use socket2::{Domain, Protocol, Socket, Type};
use crate::config::structs::tracker_client_config::TrackerClientConfig;
use crate::udp::structs::udp_transport::UdpTransport;
use crate::udp::traits::transport::Transport;

impl UdpTransport {
    /// Resolves `host` and connects a fresh UDP socket to the first address.
    #[tracing::instrument(skip(config), level = "debug")]
    pub fn connect(host: &str, config: &TrackerClientConfig) -> io::Result<UdpTransport> {
        let peer_addr = host.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("could not resolve tracker address {host}"))
        })?;
        Self::connect_addr(peer_addr, config)
    }

    pub fn connect_addr(peer_addr: SocketAddr, config: &TrackerClientConfig) -> io::Result<UdpTransport> {
        let domain = if peer_addr.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        if config.recv_buffer_size > 0 {
            socket.set_recv_buffer_size(config.recv_buffer_size)?;
        }
        socket.set_read_timeout(config.receive_timeout())?;
        socket.set_write_timeout(config.send_timeout())?;

        let bind_address: SocketAddr = if peer_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        socket.bind(&bind_address.into())?;
        socket.connect(&peer_addr.into())?;

        let socket: UdpSocket = socket.into();
        debug!("[UDP] Socket {} connected to tracker {peer_addr}", socket.local_addr()?);

        Ok(UdpTransport {
            socket: Some(socket),
            peer_addr,
        })
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket()?.local_addr()
    }

    /// `None` blocks without limit.
    pub fn set_receive_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.socket()?.set_read_timeout(timeout.filter(|t| !t.is_zero()))
    }

    fn socket(&self) -> io::Result<&UdpSocket> {
        self.socket.as_ref().ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "transport is closed"))
    }
}

impl Transport for UdpTransport {
    fn send(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.socket()?.send(bytes)
    }

    fn recv(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.socket()?.recv(buffer)
    }

    fn close(&mut self) -> io::Result<()> {
        self.socket.take();
        Ok(())
    }
}
