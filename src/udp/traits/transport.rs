use std::io;

/// A connected, single-peer datagram channel with blocking I/O.
///
/// `send` transmits one datagram, `recv` blocks until one datagram arrives
/// (or the implementation's timeout expires) and returns its length.
/// Operations after `close` fail with an I/O error.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn send(&mut self, bytes: &[u8]) -> io::Result<usize>;

    fn recv(&mut self, buffer: &mut [u8]) -> io::Result<usize>;

    fn close(&mut self) -> io::Result<()>;
}
