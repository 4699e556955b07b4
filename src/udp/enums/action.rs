/// Action codes of the UDP tracker protocol.
///
/// Announce is part of the protocol but never sent by this client.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[repr(u32)]
pub enum Action {
    Connect = 0,
    Announce = 1,
    Scrape = 2,
    Error = 3,
}
