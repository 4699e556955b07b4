/// Blocking, connected datagram channel.
pub mod transport;
