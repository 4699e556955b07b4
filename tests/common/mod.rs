#![allow(dead_code)]
use rand::RngExt;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use btshow::config::structs::configuration::Configuration;
use btshow::config::structs::tracker_client_config::TrackerClientConfig;
use btshow::tracker::structs::info_hash::InfoHash;
use btshow::udp::enums::request::Request;
use btshow::udp::enums::response::Response;
use btshow::udp::structs::connect_response::ConnectResponse;
use btshow::udp::structs::connection_id::ConnectionId;
use btshow::udp::structs::error_response::ErrorResponse;
use btshow::udp::structs::scrape_response::ScrapeResponse;
use btshow::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;

pub const TEST_CONNECTION_ID: u64 = 0x1122334455667788;

/// How the fake tracker answers scrape requests.
#[derive(Clone)]
pub enum ScrapeBehaviour {
    /// Statistics derived from each info hash, see [`stats_for`].
    Stats,
    Error(&'static str),
    /// Never answer.
    Silent,
}

/// A tracker on a loopback socket, served from its own thread.
pub struct FakeTracker {
    pub addr: SocketAddr,
    pub connects: Arc<AtomicUsize>,
    pub scrapes: Arc<AtomicUsize>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FakeTracker {
    pub fn start(behaviour: ScrapeBehaviour) -> FakeTracker {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("bind fake tracker");
        socket.set_read_timeout(Some(Duration::from_millis(50))).expect("set read timeout");
        let addr = socket.local_addr().expect("local addr");

        let connects = Arc::new(AtomicUsize::new(0));
        let scrapes = Arc::new(AtomicUsize::new(0));
        let stop = Arc::new(AtomicBool::new(false));

        let handle = {
            let connects = connects.clone();
            let scrapes = scrapes.clone();
            let stop = stop.clone();
            std::thread::spawn(move || {
                let mut buffer = [0u8; 1496];
                while !stop.load(Ordering::Relaxed) {
                    let (size, remote) = match socket.recv_from(&mut buffer) {
                        Ok(received) => received,
                        Err(_) => continue,
                    };
                    let response: Response = match Request::from_bytes(&buffer[..size]) {
                        Ok(Request::Connect(r)) => {
                            connects.fetch_add(1, Ordering::Relaxed);
                            ConnectResponse {
                                connection_id: ConnectionId(TEST_CONNECTION_ID),
                                transaction_id: r.transaction_id,
                            }.into()
                        }
                        Ok(Request::Scrape(r)) => {
                            scrapes.fetch_add(1, Ordering::Relaxed);
                            match &behaviour {
                                ScrapeBehaviour::Stats => ScrapeResponse {
                                    transaction_id: r.transaction_id,
                                    torrent_stats: r.info_hashes.iter().map(stats_for).collect(),
                                }.into(),
                                ScrapeBehaviour::Error(message) => ErrorResponse {
                                    transaction_id: r.transaction_id,
                                    message: (*message).into(),
                                }.into(),
                                ScrapeBehaviour::Silent => continue,
                            }
                        }
                        Err(_) => continue,
                    };
                    let bytes = response.write_to_vec().expect("encode response");
                    let _ = socket.send_to(&bytes, remote);
                }
            })
        };

        FakeTracker { addr, connects, scrapes, stop, handle: Some(handle) }
    }

    pub fn host(&self) -> String {
        self.addr.to_string()
    }
}

impl Drop for FakeTracker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Statistics the fake tracker reports for `info_hash`.
pub fn stats_for(info_hash: &InfoHash) -> TorrentScrapeStatistics {
    TorrentScrapeStatistics {
        seeders: info_hash.0[0] as u32,
        completed: info_hash.0[1] as u32,
        leechers: info_hash.0[2] as u32,
    }
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let mut bytes = [0u8; 20];
    for byte in &mut bytes {
        *byte = rng.random();
    }
    InfoHash(bytes)
}

pub fn create_test_client_config() -> TrackerClientConfig {
    let mut config = Configuration::init().tracker_client;
    config.receive_timeout = 2;
    config.send_timeout = 2;
    config
}
